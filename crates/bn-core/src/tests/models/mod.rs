mod resource;
mod user;
