pub mod badge;
pub mod cards;
pub mod footer;
pub mod icons;
pub mod lead_form;
pub mod navbar;
