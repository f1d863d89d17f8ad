mod credential;
mod port;
