mod lookup;
mod watch;

pub use lookup::lookup;
pub use watch::watch;
