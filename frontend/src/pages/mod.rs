pub mod name_wheel;
