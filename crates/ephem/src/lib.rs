//! # `horoscope-ephem` - Swiss Ephemeris 星历适配器
//!
//! 基于 `swisseph` crate 实现 `EphemerisPort`。
//! 数据目录通过 `set_ephe_path` 交给 Swiss Ephemeris，其中可放置：
//! - `sepl_*.se1` / `semo_*.se1` 二进制星历文件
//! - `swe_deltat.txt` ΔT 覆盖表
//!
//! 目录中缺少二进制文件时，Swiss Ephemeris 自动退回内置的 Moshier 解析星历。

pub mod swiss;

pub use swiss::SwissEphemeris;
