mod config;
mod duration;
mod resource;
mod safe_format;
