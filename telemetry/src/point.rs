use adt7410::{Reading, Resolution};
use chrono::{DateTime, Utc};
use influxdb::InfluxDbWriteable;

pub const MEASUREMENT: &str = "adt7410";

#[derive(Clone, Debug, InfluxDbWriteable)]
pub struct Point {
    time: DateTime<Utc>,

    #[influxdb(tag)]
    resolution: String,

    tick: u32,
    temperature_c: f64,
    raw: u32,
    t_low: bool,
    t_high: bool,
    t_crit: bool,
}

impl Point {
    pub fn new(reading: &Reading, time: DateTime<Utc>) -> Self {
        let status = reading.status();
        let resolution = match reading.resolution() {
            Resolution::Bits13 => "13bit",
            Resolution::Bits16 => "16bit",
        };

        Self {
            time,
            resolution: resolution.to_string(),
            tick: reading.tick,
            temperature_c: f64::from(reading.temperature_c),
            raw: u32::from(reading.raw),
            t_low: status.t_low(),
            t_high: status.t_high(),
            t_crit: status.t_crit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adt7410::conversion::encode;
    use adt7410::{Sample, Status};
    use influxdb::Query;

    #[test]
    fn point_carries_reading() {
        let sample = Sample {
            raw: encode(-15.625, Resolution::Bits16),
            config: 0x80,
            status: Status(0x10),
            temperature_c: -15.625,
        };
        let reading = Reading::from_sample(3, &sample);
        let point = Point::new(&reading, Utc::now());

        assert_eq!(point.temperature_c, -15.625);
        assert_eq!(point.raw, 0xF830);
        assert_eq!(point.resolution, "16bit");
        assert!(point.t_low);
        assert!(!point.t_high);

        let line = point.into_query(MEASUREMENT).build().unwrap().get();
        assert!(line.starts_with("adt7410,"));
        assert!(line.contains("resolution=16bit"));
        assert!(line.contains("temperature_c="));
    }
}
