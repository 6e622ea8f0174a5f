mod registry;
mod session;
