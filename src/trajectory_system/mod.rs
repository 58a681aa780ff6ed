pub mod cannonball;
pub mod vis_viva;
