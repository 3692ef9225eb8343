use starclock::{calc, Longitude, SystemClock};

fn main() {
    let longitude = Longitude::from_degrees(-72.1053).expect("valid longitude");
    let readings = calc(&SystemClock, longitude);

    for line in readings.lines() {
        println!("{line}");
    }
}
