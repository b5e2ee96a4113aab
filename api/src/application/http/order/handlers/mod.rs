pub mod confirm_order;
