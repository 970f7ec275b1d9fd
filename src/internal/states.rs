pub mod swap_cell;
