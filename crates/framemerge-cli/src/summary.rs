use console::Style;
use framemerge_core::config::MergeConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_merge_summary(config: &MergeConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Frame Merge"));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}")
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dataset"),
        s.value
            .apply_to(format!("{}/{}", config.data_location, config.data_name))
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(config.n_frames)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Group size"),
        s.value.apply_to(config.group_size)
    );
    if config.skip.is_empty() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Skip"),
            s.disabled.apply_to("none")
        );
    } else {
        println!("  {:<14}{:?}", s.label.apply_to("Skip"), config.skip);
    }

    if config.sequential {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Mode"),
            s.method.apply_to("sequential")
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Mode"),
            s.method.apply_to("concurrent")
        );
        match config.workers {
            Some(n) => println!("  {:<14}{}", s.label.apply_to("Workers"), s.value.apply_to(n)),
            None => println!(
                "  {:<14}{}",
                s.label.apply_to("Workers"),
                s.value.apply_to("auto")
            ),
        }
    }
    println!();
}
