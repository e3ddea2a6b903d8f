use whitted::{output, render, Preset, RenderConfig, Vec3};

fn small(preset: Preset) -> RenderConfig {
    let mut config = RenderConfig { width: 64, height: 48, ..RenderConfig::default() };
    preset.configure(&mut config);
    config
}

#[test]
fn single_sphere_silhouette() {
    let scene = Preset::SingleSphere.build().unwrap();
    let frame = render(&scene, &small(Preset::SingleSphere), None).unwrap();

    // sphere center (-3, 0, -16) lands left of the image center
    assert_eq!(frame.get(26, 24), Vec3(0.4, 0.4, 0.3));
    assert_eq!(frame.get(63, 0), Vec3(0.2, 0.7, 0.8));
}

#[test]
fn ppm_file_has_header_and_payload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("renders/out.ppm");

    let scene = Preset::Whitted.build().unwrap();
    let config = small(Preset::Whitted);
    let frame = render(&scene, &config, None).unwrap();
    output::save(&path, &frame).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let header = b"P6\n64 48\n255\n";
    assert_eq!(&bytes[..header.len()], header);
    assert_eq!(bytes.len(), header.len() + 64 * 48 * 3);

    // top-left corner looks past every object into the sky
    assert_eq!(&bytes[header.len()..header.len() + 3], &[51, 179, 204]);
}

#[test]
fn png_goes_through_image_crate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");

    let scene = Preset::FourSpheres.build().unwrap();
    let config = RenderConfig { samples_per_pixel: 2, ..small(Preset::FourSpheres) };
    let frame = render(&scene, &config, None).unwrap();
    output::save(&path, &frame).unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (64, 48));
}
