pub mod answer;
pub mod identity;
pub mod kind;
pub mod locale;
