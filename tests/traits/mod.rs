pub mod boundary_ext;
