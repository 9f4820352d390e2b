mod common;
mod controller;
mod gate;
