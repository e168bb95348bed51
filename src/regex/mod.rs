// Lazily compiled regular expressions

#[macro_use]
mod cache;
