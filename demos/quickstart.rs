use chrono::Utc;
use orrery::{DayClock, FormatOptions, Style, CATALOG};

fn main() {
    let now = Utc::now();
    let options = FormatOptions::default().with_longitude(-74.0);

    for body in CATALOG {
        let clock = DayClock::new(body.clone());
        let ts = clock.from_date_time(now);
        println!("{:<8} {}", body.name(), clock.format(&ts, Style::Full, &options));
    }

    let earth = DayClock::default();
    let text = earth.format(&earth.now(), Style::Display, &FormatOptions::default());
    match earth.parse(&text) {
        Ok(back) => println!("parsed {text} back to {:?}", earth.to_date_time(&back)),
        Err(err) => eprintln!("{err}"),
    }
}
