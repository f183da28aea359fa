//! Types that mirror the dashboard backend's JSON schema.

use serde::Deserialize;

/// One point-in-time set of resource measurements, pushed over the
/// WebSocket inside a `{"type": "metrics", "data": ...}` envelope.
#[derive(Debug, Deserialize, Clone)]
pub struct MetricSnapshot {
    pub cpu_percent: f64,
    pub ram_percent: f64,
    pub ram_used_gb: f64,
    pub ram_total_gb: f64,
    pub disk_percent: f64,
    pub disk_used_gb: f64,
    pub disk_total_gb: f64,
    pub cpu_temp: Option<f64>,
    #[serde(default)]
    pub uptime_formatted: String,
    #[serde(default)]
    pub alerts: Vec<String>,
}

/// Inbound WebSocket envelope. Unknown `type` values are ignored.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
    pub username: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub status: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Container {
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: String,
    pub state: String,
    pub ports: String,
}

impl Container {
    pub fn is_running(&self) -> bool {
        self.state.eq_ignore_ascii_case("running")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageInfo {
    pub id: String,
    pub repository: String,
    pub tag: String,
    pub size: String,
    pub created: String,
}

#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub images: Vec<ImageInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified: String,
    pub permissions: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FileContent {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceUnit {
    pub name: String,
    pub load: String,
    pub active: String,
    pub sub: String,
}

#[derive(Debug, Deserialize)]
pub struct ServicesResponse {
    #[serde(default)]
    pub services: Vec<ServiceUnit>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SystemIdentity {
    pub hostname: String,
    pub user: String,
    pub platform: String,
    pub release: String,
    pub machine: String,
}

/// Aggregates over a trailing window, from GET /api/metrics/stats.
#[derive(Debug, Deserialize, Clone)]
pub struct StatsSummary {
    pub period_hours: u32,
    pub sample_count: u64,
    pub cpu: CpuStats,
    pub ram: RamStats,
    pub temperature: TempStats,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CpuStats {
    pub avg: f64,
    pub max: f64,
    pub min: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RamStats {
    pub avg: f64,
    pub max: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TempStats {
    pub avg: Option<f64>,
    pub max: Option<f64>,
}
