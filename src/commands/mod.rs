pub mod check_icon;
pub mod prepare_icons;
