pub mod backend;
pub mod google_maps;
