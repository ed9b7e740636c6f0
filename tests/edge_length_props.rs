// 任意源图尺寸与边长组合下，输出必须恰好为 L×L 且带 alpha
use image::{ImageBuffer, ImageFormat, Rgb};
use icon_exporter::icon_export::{ExportConfig, IconExporter};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn written_icon_matches_edge(width in 1u32..160, height in 1u32..160, edge in 1u32..140) {
        let tmp = tempfile::tempdir().expect("tempdir");
        let source = tmp.path().join("logo.png");
        ImageBuffer::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 7]))
            .save_with_format(&source, ImageFormat::Png)
            .expect("write source");

        let exported = IconExporter::new(
            ExportConfig::default()
                .with_source_path(&source)
                .with_output_dir(tmp.path().join("assets"))
                .with_sizes([edge]),
        )
        .expect("exporter init failed")
        .export()
        .expect("export should succeed");

        prop_assert_eq!(exported.len(), 1);
        let decoded = image::open(&exported[0].path).expect("decode icon");
        prop_assert_eq!((decoded.width(), decoded.height()), (edge, edge));
        prop_assert!(decoded.color().has_alpha());
    }
}
