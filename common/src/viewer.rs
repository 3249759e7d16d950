//! 書類ビューア（表示専用の状態）
//!
//! 拡大率・回転・画像インデックスのみを持ち、共有状態は持たない。

/// 拡大率の下限・上限・刻み（%）
pub const ZOOM_MIN: u16 = 50;
pub const ZOOM_MAX: u16 = 200;
pub const ZOOM_STEP: u16 = 25;
pub const ZOOM_DEFAULT: u16 = 100;

/// 固定長の画像リストを循環移動するインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// `len` は1以上に丸める
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// 最後の次は先頭
    pub fn next(&mut self) -> usize {
        self.index = if self.index + 1 >= self.len { 0 } else { self.index + 1 };
        self.index
    }

    /// 先頭の前は最後
    pub fn previous(&mut self) -> usize {
        self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        self.index
    }

    /// 範囲外は無視
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

/// 回転（90度刻みで循環）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    pub fn rotated(&self) -> Rotation {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }
}

/// 拡大率と回転
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTransform {
    zoom: u16,
    rotation: Rotation,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: ZOOM_DEFAULT,
            rotation: Rotation::Deg0,
        }
    }
}

impl ViewTransform {
    pub fn zoom(&self) -> u16 {
        self.zoom
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn zoom_in(&mut self) -> u16 {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
        self.zoom
    }

    pub fn zoom_out(&mut self) -> u16 {
        self.zoom = self.zoom.saturating_sub(ZOOM_STEP).max(ZOOM_MIN);
        self.zoom
    }

    pub fn rotate(&mut self) -> Rotation {
        self.rotation = self.rotation.rotated();
        self.rotation
    }

    /// CSS transform 値
    pub fn css(&self) -> String {
        format!(
            "scale({}) rotate({}deg)",
            f32::from(self.zoom) / 100.0,
            self.rotation.degrees()
        )
    }

    pub fn zoom_label(&self) -> String {
        format!("{}%", self.zoom)
    }
}
