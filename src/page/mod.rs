use crate::controllers::consts::{SHOW_MY_LOCATION_LABEL, SHOW_STOPS_LABEL, SHOW_TERMINALS_LABEL};
use crate::dom::ids::{
    DATABASE_UPLOAD_FORM, DATABASE_VEHICLES_INPUT, FILE_INPUT, LOCATE_ME_BUTTON, MAP_CONTAINER,
    STOP_BUTTON, TERMINAL_BUTTON, UPLOAD_FORM, UPLOAD_STATS, UPLOAD_VEHICLES_INPUT,
};
use crate::dom::{Element, InMemoryDocument};


pub const INITIAL_MAP_HTML: &str = "<div class=\"folium-map\"></div>";

/// The pages of the web application that carry client-side behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Terminal and stop map.
    Home,
    Travel,
    Optimize,
}

impl Page {
    pub fn element_ids(&self) -> &'static [&'static str] {
        match self {
            Page::Home => &[TERMINAL_BUTTON, STOP_BUTTON, MAP_CONTAINER],
            Page::Travel => &[LOCATE_ME_BUTTON, MAP_CONTAINER],
            Page::Optimize => &[
                UPLOAD_FORM,
                FILE_INPUT,
                UPLOAD_VEHICLES_INPUT,
                DATABASE_UPLOAD_FORM,
                DATABASE_VEHICLES_INPUT,
                UPLOAD_STATS,
            ],
        }
    }

    /// An in-memory rendition of the page as the server first delivers it.
    pub fn skeleton(&self) -> InMemoryDocument {
        let document = InMemoryDocument::new().with_elements(self.element_ids());
        for (id, label) in [
            (TERMINAL_BUTTON, SHOW_TERMINALS_LABEL),
            (STOP_BUTTON, SHOW_STOPS_LABEL),
            (LOCATE_ME_BUTTON, SHOW_MY_LOCATION_LABEL),
        ] {
            if self.element_ids().contains(&id) {
                document.insert(id).set_text(label);
            }
        }
        if self.element_ids().contains(&MAP_CONTAINER) {
            document.insert(MAP_CONTAINER).set_inner_html(INITIAL_MAP_HTML);
        }
        document
    }
}
