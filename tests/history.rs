//! Rolling buffer tests: FIFO eviction and parallel-series consistency.

use dashtop::history::{push_capped, Sample, SeriesBuffer};

fn sample(n: usize) -> Sample {
    Sample {
        cpu: n as f64,
        ram: n as f64 + 0.5,
        temp: 40.0 + n as f64,
        label: format!("t{n}"),
    }
}

#[test]
fn buffer_caps_at_capacity_across_all_series() {
    let cap = 30;
    let mut buf = SeriesBuffer::new(cap);
    for n in 0..cap + 1 {
        buf.push(sample(n));
    }
    assert_eq!(buf.len(), cap);
    assert_eq!(buf.cpu().len(), cap);
    assert_eq!(buf.ram().len(), cap);
    assert_eq!(buf.temp().len(), cap);
    assert_eq!(buf.labels().len(), cap);
}

#[test]
fn eviction_is_fifo_and_keeps_series_aligned() {
    let cap = 5;
    let mut buf = SeriesBuffer::new(cap);
    for n in 0..8 {
        buf.push(sample(n));
    }
    // Oldest three (0, 1, 2) evicted; front of every series is sample 3
    assert_eq!(buf.cpu().front().copied(), Some(3.0));
    assert_eq!(buf.ram().front().copied(), Some(3.5));
    assert_eq!(buf.temp().front().copied(), Some(43.0));
    assert_eq!(buf.labels().front().map(String::as_str), Some("t3"));
    assert_eq!(buf.cpu().back().copied(), Some(7.0));
    assert_eq!(buf.labels().back().map(String::as_str), Some("t7"));
}

#[test]
fn buffer_below_capacity_keeps_everything_in_order() {
    let mut buf = SeriesBuffer::new(10);
    for n in 0..4 {
        buf.push(sample(n));
    }
    assert_eq!(buf.len(), 4);
    let cpus: Vec<f64> = buf.cpu().iter().copied().collect();
    assert_eq!(cpus, vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn push_capped_evicts_oldest() {
    let mut dq = std::collections::VecDeque::new();
    for n in 0..4 {
        push_capped(&mut dq, n, 3);
    }
    assert_eq!(dq.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn sample_from_snapshot_charts_missing_temp_as_zero() {
    let m: dashtop::types::MetricSnapshot = serde_json::from_value(serde_json::json!({
        "cpu_percent": 12.0,
        "ram_percent": 34.0,
        "ram_used_gb": 1.0,
        "ram_total_gb": 4.0,
        "disk_percent": 50.0,
        "disk_used_gb": 10.0,
        "disk_total_gb": 20.0,
        "cpu_temp": null
    }))
    .unwrap();
    let s = Sample::from_snapshot(&m, "now".into());
    assert_eq!(s.temp, 0.0);
    assert_eq!(s.cpu, 12.0);
}
