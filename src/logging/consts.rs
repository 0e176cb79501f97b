pub const DEFAULT_DIRECTIVE: &str = "umpire_map_client=info";
pub const VERBOSE_DIRECTIVE: &str = "umpire_map_client=debug";
