pub mod royale;
