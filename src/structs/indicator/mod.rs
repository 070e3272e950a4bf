pub mod indicator_state;
