pub mod entrypoint;
pub mod model {
    pub mod external;
    pub mod internal;
}
pub mod service {
    pub mod game_manager;
    pub mod game_thread;
    pub mod match_controller;
}
#[cfg(test)]
mod test;
