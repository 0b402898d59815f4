pub mod error;
pub mod payload;
pub mod sample;
pub mod sun_times;
pub mod weather_feed;

#[cfg(test)]
pub(crate) mod test_server;
