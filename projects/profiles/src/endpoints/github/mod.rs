pub mod followers;
