mod handlers;
mod parse_good;
