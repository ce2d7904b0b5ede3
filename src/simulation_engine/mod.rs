pub mod routes;
pub mod simulator;
pub mod stops;
pub mod vehicles;
