mod eval;
mod invoke;
mod server;
