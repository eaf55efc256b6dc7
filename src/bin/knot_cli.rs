#[cfg(target_arch = "wasm32")]
fn main() {
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = native::run() {
        eprintln!("knot_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use lissajous_engine::controls::{self, PARAMETER_SPECS};
    use lissajous_engine::knot::{CurveParameters, DEFAULT_OFFSET_RATIO};
    use lissajous_engine::render_scene;
    use lissajous_engine::scene::{CAMERA_PRESETS, GroupKind, Scene, SceneOptions};
    use std::fs::{self, File};
    use std::io::{BufWriter, Write};
    use std::path::{Path, PathBuf};

    const USAGE: &str = r#"knot_cli (lissajous-engine)

USAGE:
  knot_cli presets
  knot_cli params
  knot_cli run [options]

OPTIONS (run):
  --a <n>             X frequency (default 3)
  --b <n>             Y frequency (default 4)
  --c <n>             Z frequency (default 2)
  --phi1 <rad>        X phase (default π/2)
  --phi2 <rad>        Y phase (default π/2)
  --points <n>        Sample count (default 100)
  --offset-ratio <r>  Shadow plane distance factor (default 1.5)
  --raw               Skip slider clamping (any frequency, 2 to 10000 points)
  --json <path>       Write the scene as JSON (stdout otherwise)
  --obj <path>        Write knot and shadows as OBJ polylines
  --overwrite         Overwrite existing output files
  -h, --help          Show this help
"#;

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut args = Args::new(args);

        let Some(command) = args.next() else {
            print_usage();
            return Ok(());
        };

        match command.as_str() {
            "presets" => {
                print_presets();
                Ok(())
            }
            "params" => {
                print_params();
                Ok(())
            }
            "run" => cmd_run(&mut args),
            "-h" | "--help" | "help" => {
                print_usage();
                Ok(())
            }
            other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
        }
    }

    fn print_usage() {
        println!("{USAGE}");
    }

    fn print_presets() {
        for preset in &CAMERA_PRESETS {
            let camera = preset.camera;
            println!(
                "{:<14} eye={:?} up={:?} center={:?}",
                preset.name, camera.eye, camera.up, camera.center
            );
        }
    }

    fn print_params() {
        for spec in &PARAMETER_SPECS {
            println!(
                "{:<9} {:<18} min={:.4} max={:.4} step={:.4} default={:.4}",
                spec.id.key(),
                spec.name,
                spec.min,
                spec.max,
                spec.step,
                spec.default
            );
        }
    }

    fn cmd_run(args: &mut Args) -> Result<(), String> {
        let defaults = CurveParameters::default();
        let mut inputs = [
            defaults.a,
            defaults.b,
            defaults.c,
            defaults.phi1,
            defaults.phi2,
            defaults.n_points as f64,
        ];
        let mut offset_ratio = DEFAULT_OFFSET_RATIO;
        let mut raw = false;
        let mut json_path: Option<PathBuf> = None;
        let mut obj_path: Option<PathBuf> = None;
        let mut overwrite = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--a" => inputs[0] = args.number("--a")?,
                "--b" => inputs[1] = args.number("--b")?,
                "--c" => inputs[2] = args.number("--c")?,
                "--phi1" => inputs[3] = args.number("--phi1")?,
                "--phi2" => inputs[4] = args.number("--phi2")?,
                "--points" => inputs[5] = args.number("--points")?,
                "--offset-ratio" => offset_ratio = args.number("--offset-ratio")?,
                "--raw" => raw = true,
                "--json" => json_path = Some(PathBuf::from(args.value("--json")?)),
                "--obj" => obj_path = Some(PathBuf::from(args.value("--obj")?)),
                "--overwrite" => overwrite = true,
                "-h" | "--help" => {
                    print_usage();
                    return Ok(());
                }
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        let [a, b, c, phi1, phi2, n_points] = inputs;
        let params = if raw {
            raw_parameters(inputs)?
        } else {
            controls::parameters_from_inputs(a, b, c, phi1, phi2, n_points)
                .map_err(|e| e.to_string())?
        };
        let params = params.with_offset_ratio(offset_ratio);

        let scene = render_scene(&params, &SceneOptions::default()).map_err(|e| e.to_string())?;
        let json = serde_json::to_string_pretty(&scene).map_err(|e| format!("encode scene: {e}"))?;

        if let Some(path) = json_path.as_deref() {
            write_text_file(path, &json, overwrite)?;
            eprintln!("wrote {}", path.display());
        } else {
            println!("{json}");
        }

        if let Some(path) = obj_path.as_deref() {
            write_obj_file(path, &scene, overwrite)?;
            eprintln!("wrote {}", path.display());
        }

        eprintln!(
            "knot a={} b={} c={} phi1={:.4} phi2={:.4}: points={} segments={} closed={}",
            params.a,
            params.b,
            params.c,
            params.phi1,
            params.phi2,
            params.n_points,
            scene.segment_count(),
            params.is_closed()
        );

        Ok(())
    }

    fn raw_parameters(inputs: [f64; 6]) -> Result<CurveParameters, String> {
        let [a, b, c, phi1, phi2, n_points] = inputs;
        if !(n_points.is_finite() && n_points >= 0.0 && n_points.fract() == 0.0) {
            return Err(format!("--points must be a whole number, got {n_points}"));
        }
        // Saturating cast; counts beyond MAX_POINTS are rejected before sampling.
        let params = CurveParameters::new(a, b, c, phi1, phi2, n_points as usize);
        params.validate().map_err(|e| e.to_string())?;
        Ok(params)
    }

    fn write_text_file(path: &Path, text: &str, overwrite: bool) -> Result<(), String> {
        ensure_writable(path, overwrite)?;
        let text = if text.ends_with('\n') {
            text.to_owned()
        } else {
            format!("{text}\n")
        };
        fs::write(path, text).map_err(|e| format!("write {}: {e}", path.display()))
    }

    /// One OBJ object per group; each segment becomes an `l` element.
    fn write_obj_file(path: &Path, scene: &Scene, overwrite: bool) -> Result<(), String> {
        ensure_writable(path, overwrite)?;

        let file = File::create(path).map_err(|e| format!("create {}: {e}", path.display()))?;
        let mut w = BufWriter::new(file);

        writeln!(w, "# lissajous-engine knot_cli").map_err(|e| format!("write obj: {e}"))?;

        let mut next_index = 1usize;
        for kind in GroupKind::ALL {
            let Some(group) = scene.group(kind) else {
                continue;
            };
            writeln!(w, "o {}", group.name.replace(' ', "_")).map_err(|e| format!("write obj: {e}"))?;

            for segment in &group.segments {
                let [sx, sy, sz] = segment.start;
                let [ex, ey, ez] = segment.end;
                writeln!(w, "v {sx} {sy} {sz}").map_err(|e| format!("write obj: {e}"))?;
                writeln!(w, "v {ex} {ey} {ez}").map_err(|e| format!("write obj: {e}"))?;
                writeln!(w, "l {} {}", next_index, next_index + 1)
                    .map_err(|e| format!("write obj: {e}"))?;
                next_index += 2;
            }
        }

        w.flush().map_err(|e| format!("flush {}: {e}", path.display()))
    }

    fn ensure_writable(path: &Path, overwrite: bool) -> Result<(), String> {
        if path.exists() && !overwrite {
            return Err(format!(
                "refusing to overwrite existing file {} (use --overwrite)",
                path.display()
            ));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| format!("create dir {}: {e}", parent.display()))?;
        }
        Ok(())
    }

    struct Args {
        args: Vec<String>,
        pos: usize,
    }

    impl Args {
        fn new(args: Vec<String>) -> Self {
            Self { args, pos: 0 }
        }

        fn next(&mut self) -> Option<String> {
            let arg = self.args.get(self.pos)?.clone();
            self.pos += 1;
            Some(arg)
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        }

        fn number(&mut self, flag: &str) -> Result<f64, String> {
            let raw = self.value(flag)?;
            raw.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid number for {flag} (`{raw}`): {e}"))
        }
    }
}
