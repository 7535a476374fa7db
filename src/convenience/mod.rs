pub mod unbox;
