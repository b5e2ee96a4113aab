pub mod get_menu_sample;
