mod comment;
mod friendship;
mod task;
mod user;
