#![allow(dead_code)]

mod mock_refresh_port;

pub use mock_refresh_port::MockCacheRefreshPort;
