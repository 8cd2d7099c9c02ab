mod models;
mod slug;
