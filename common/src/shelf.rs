//! 棚番（ラック/棚/箱/フォルダ）と棚コード
//!
//! 各座標は常に1以上。棚コードは座標から都度生成し、保持しない。

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 棚番の軸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    Rack,
    Shelf,
    Box,
    Folder,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Rack, Axis::Shelf, Axis::Box, Axis::Folder];

    pub fn label(&self) -> &'static str {
        match self {
            Axis::Rack => "Rack",
            Axis::Shelf => "Shelf",
            Axis::Box => "Box",
            Axis::Folder => "Folder",
        }
    }

    /// アラビア語ラベル
    pub fn arabic_label(&self) -> &'static str {
        match self {
            Axis::Rack => "رف",
            Axis::Shelf => "طابق",
            Axis::Box => "صندوق",
            Axis::Folder => "مجلد",
        }
    }
}

/// 保管場所の座標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShelfLocation {
    pub rack: NonZeroU32,
    pub shelf: NonZeroU32,
    pub r#box: NonZeroU32,
    pub folder: NonZeroU32,
}

impl Default for ShelfLocation {
    fn default() -> Self {
        Self {
            rack: NonZeroU32::MIN,
            shelf: NonZeroU32::MIN,
            r#box: NonZeroU32::MIN,
            folder: NonZeroU32::MIN,
        }
    }
}

impl ShelfLocation {
    /// 生の整数から生成（0を含む場合はエラー）
    pub fn new(rack: u32, shelf: u32, r#box: u32, folder: u32) -> Result<Self> {
        let nz = |axis: Axis, v: u32| {
            NonZeroU32::new(v).ok_or_else(|| {
                Error::InvalidCoordinate(format!("{} must be >= 1 (got {})", axis.label(), v))
            })
        };
        Ok(Self {
            rack: nz(Axis::Rack, rack)?,
            shelf: nz(Axis::Shelf, shelf)?,
            r#box: nz(Axis::Box, r#box)?,
            folder: nz(Axis::Folder, folder)?,
        })
    }

    pub fn get(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Rack => self.rack.get(),
            Axis::Shelf => self.shelf.get(),
            Axis::Box => self.r#box.get(),
            Axis::Folder => self.folder.get(),
        }
    }

    pub fn set(&mut self, axis: Axis, value: NonZeroU32) {
        match axis {
            Axis::Rack => self.rack = value,
            Axis::Shelf => self.shelf = value,
            Axis::Box => self.r#box = value,
            Axis::Folder => self.folder = value,
        }
    }

    /// 棚コード `R{rack}-S{shelf}-B{box}-F{folder}`
    pub fn shelf_code(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ShelfLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R{}-S{}-B{}-F{}",
            self.rack, self.shelf, self.r#box, self.folder
        )
    }
}

/// 入力文字列を座標値として解釈
///
/// 数値でない、または0以下の場合は `None`。
/// 先頭の整数部分のみを読む（"3abc" → 3）。
pub fn parse_coordinate(input: &str) -> Option<NonZeroU32> {
    let trimmed = input.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    let value: i64 = trimmed[..digits_end].parse().ok()?;
    u32::try_from(value).ok().and_then(NonZeroU32::new)
}
