//! 长度单位换算
//!
//! docx 中的页面尺寸、边距、缩进、行距均以 twip（1/20 磅）为单位，
//! 字号以半磅为单位。

/// 将磅转换为 twip
pub fn convert_point_to_twip(point: f32) -> i32 {
    (point * 20.0).round() as i32
}

/// 将磅转换为半磅（docx 字号单位）
pub fn convert_point_to_half_point(point: f32) -> usize {
    (point * 2.0).round() as usize
}

/// 将厘米转换为 twip
pub fn convert_cm_to_twip(cm: f32) -> i32 {
    (cm / 2.54 * 1440.0).round() as i32
}

/// 将毫米转换为 twip
pub fn convert_mm_to_twip(mm: f32) -> i32 {
    convert_cm_to_twip(mm / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_in_twips() {
        assert_eq!(convert_mm_to_twip(210.0), 11906);
        assert_eq!(convert_mm_to_twip(297.0), 16838);
    }

    #[test]
    fn points() {
        assert_eq!(convert_point_to_twip(28.0), 560);
        assert_eq!(convert_point_to_half_point(22.0), 44);
        assert_eq!(convert_point_to_half_point(9.0), 18);
    }

    #[test]
    fn margins() {
        assert_eq!(convert_cm_to_twip(3.7), 2098);
        assert_eq!(convert_cm_to_twip(2.54), 1440);
    }
}
