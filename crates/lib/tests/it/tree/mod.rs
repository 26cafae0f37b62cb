pub mod assignment;
pub mod children;
