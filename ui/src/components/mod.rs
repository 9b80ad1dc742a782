pub mod about;
pub mod app;
pub mod catalog_client;
pub mod category_list;
pub mod category_view;
pub mod decor;
pub mod handoff;
pub mod hero;
pub mod product_view;
pub mod timer;
pub mod why_choose;
