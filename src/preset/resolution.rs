/// Named frame sizes accepted in preset strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Resolution {
    /// `QVGA`, 320x240.
    #[serde(rename = "QVGA")]
    Qvga,
    /// `VGA`, 640x480.
    #[serde(rename = "VGA")]
    Vga,
    /// `qHD`, 640x360 (quarter of full HD).
    #[serde(rename = "qHD")]
    QuarterHd,
    /// `XGA`, 1024x768.
    #[serde(rename = "XGA")]
    Xga,
    /// `HD`, 1280x720.
    #[serde(rename = "HD")]
    Hd,
    /// `WXGA`, 1280x768.
    #[serde(rename = "WXGA")]
    Wxga,
    /// `FHD`, 1920x1080.
    #[serde(rename = "FHD")]
    FullHd,
    /// `QHD`, 2560x1440.
    #[serde(rename = "QHD")]
    QuadHd,
}

impl Resolution {
    /// Every resolution, in the order preset matching tries them.
    pub const ALL: [Resolution; 8] = [
        Resolution::Qvga,
        Resolution::Vga,
        Resolution::QuarterHd,
        Resolution::Xga,
        Resolution::Hd,
        Resolution::Wxga,
        Resolution::FullHd,
        Resolution::QuadHd,
    ];

    /// Token used in preset strings. Case-sensitive (`qHD` and `QHD` differ).
    pub fn name(self) -> &'static str {
        match self {
            Resolution::Qvga => "QVGA",
            Resolution::Vga => "VGA",
            Resolution::QuarterHd => "qHD",
            Resolution::Xga => "XGA",
            Resolution::Hd => "HD",
            Resolution::Wxga => "WXGA",
            Resolution::FullHd => "FHD",
            Resolution::QuadHd => "QHD",
        }
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Resolution::Qvga => (320, 240),
            Resolution::Vga => (640, 480),
            Resolution::QuarterHd => (640, 360),
            Resolution::Xga => (1024, 768),
            Resolution::Hd => (1280, 720),
            Resolution::Wxga => (1280, 768),
            Resolution::FullHd => (1920, 1080),
            Resolution::QuadHd => (2560, 1440),
        }
    }

    /// Width in pixels.
    pub fn width(self) -> u32 {
        self.dimensions().0
    }

    /// Height in pixels.
    pub fn height(self) -> u32 {
        self.dimensions().1
    }

    /// Exact token lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
