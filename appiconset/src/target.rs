/// Logical size of the master entry.
pub const MASTER_SIZE: &str = "1024x1024";

/// One image an icon set is expected to contain.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TargetSpec {
    pub idiom: &'static str,
    pub platform: &'static str,
    pub scale: Option<&'static str>,
    pub size: &'static str,
}

impl TargetSpec {
    const fn ios(size: &'static str, scale: Option<&'static str>) -> Self {
        Self {
            idiom: "universal",
            platform: "ios",
            scale,
            size,
        }
    }

    /// The unscaled 1024x1024 entry stands for the source image itself.
    pub fn is_master(&self) -> bool {
        self.scale.is_none() && self.size == MASTER_SIZE
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.size, self.scale)
    }

    /// File name of the generated image, e.g. `icon-83_5x83_5@2x.png`.
    pub fn filename(&self) -> String {
        let size = self.size.replacen('.', "_", 1);
        match self.scale {
            Some(scale) => format!("icon-{}@{}.png", size, scale),
            None => format!("icon-{}.png", size),
        }
    }
}

pub const TARGET_IMAGES: [TargetSpec; 16] = [
    TargetSpec::ios("20x20", Some("2x")),
    TargetSpec::ios("20x20", Some("3x")),
    TargetSpec::ios("29x29", Some("2x")),
    TargetSpec::ios("29x29", Some("3x")),
    TargetSpec::ios("38x38", Some("2x")),
    TargetSpec::ios("38x38", Some("3x")),
    TargetSpec::ios("40x40", Some("2x")),
    TargetSpec::ios("40x40", Some("3x")),
    TargetSpec::ios("60x60", Some("2x")),
    TargetSpec::ios("60x60", Some("3x")),
    TargetSpec::ios("64x64", Some("2x")),
    TargetSpec::ios("64x64", Some("3x")),
    TargetSpec::ios("68x68", Some("2x")),
    TargetSpec::ios("76x76", Some("2x")),
    TargetSpec::ios("83.5x83.5", Some("2x")),
    TargetSpec::ios(MASTER_SIZE, None),
];

/// Pixel dimensions of a target image.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Computes pixel dimensions from a logical `WxH` size and an optional
    /// `Nx` scale.
    ///
    /// Input is not validated. Unparsable components become NaN, which
    /// saturates to 0 pixels.
    pub fn new(size: &str, scale: Option<&str>) -> Self {
        let (width, height) = size.split_once('x').unwrap_or((size, ""));
        let width = width.trim().parse::<f64>().unwrap_or(f64::NAN);
        let height = height.trim().parse::<f64>().unwrap_or(f64::NAN);
        let factor = match scale {
            Some(scale) => scale
                .trim_end_matches('x')
                .parse::<u32>()
                .map(f64::from)
                .unwrap_or(f64::NAN),
            None => 1.0,
        };
        Self {
            width: (width * factor).round() as u32,
            height: (height * factor).round() as u32,
        }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_dimensions() {
        assert_eq!(Dimensions::new("20x20", Some("2x")), Dimensions { width: 40, height: 40 });
        assert_eq!(Dimensions::new("20x20", Some("3x")), Dimensions { width: 60, height: 60 });
        assert_eq!(Dimensions::new("83.5x83.5", Some("2x")), Dimensions { width: 167, height: 167 });
        assert_eq!(Dimensions::new("10.5x7.25", Some("3x")), Dimensions { width: 32, height: 22 });
    }

    #[test]
    fn unscaled_dimensions_are_rounded() {
        assert_eq!(Dimensions::new("1024x1024", None), Dimensions { width: 1024, height: 1024 });
        assert_eq!(Dimensions::new("83.5x20.4", None), Dimensions { width: 84, height: 20 });
    }

    #[test]
    fn garbage_size_collapses_to_zero() {
        assert_eq!(Dimensions::new("bogus", Some("2x")), Dimensions { width: 0, height: 0 });
    }

    #[test]
    fn filenames() {
        let spec = TargetSpec::ios("83.5x83.5", Some("2x"));
        assert_eq!(spec.filename(), "icon-83_5x83_5@2x.png");
        assert_eq!(TargetSpec::ios("20x20", Some("3x")).filename(), "icon-20x20@3x.png");
        assert_eq!(TargetSpec::ios("60x60", None).filename(), "icon-60x60.png");
    }

    #[test]
    fn exactly_one_master() {
        let masters = TARGET_IMAGES.iter().filter(|spec| spec.is_master()).count();
        assert_eq!(masters, 1);
        assert!(TARGET_IMAGES.last().unwrap().is_master());
        assert!(TARGET_IMAGES
            .iter()
            .all(|spec| spec.idiom == "universal" && spec.platform == "ios"));
    }

    #[test]
    fn generated_filenames_are_unique() {
        let mut names: Vec<_> = TARGET_IMAGES
            .iter()
            .filter(|spec| !spec.is_master())
            .map(|spec| spec.filename())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TARGET_IMAGES.len() - 1);
    }
}
