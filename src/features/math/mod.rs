pub mod handler;
mod helpers;
pub mod service;

pub use handler::{handle_fibonacci, handle_hcf, handle_lcm, handle_prime};
pub use service::{fibonacci, gcd, hcf, is_prime, lcm, primes};
