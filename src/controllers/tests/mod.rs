mod map_refresh;
