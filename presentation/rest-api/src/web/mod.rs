pub mod products {
    pub mod form;
    pub mod handlers;
    pub mod views;
}
