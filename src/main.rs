use lingo::config::Preferences;
use lingo::i18n::fluent::Localizer;
use pico_args;
use unic_langid::LanguageIdentifier;

fn main() {
    let mut args = pico_args::Arguments::from_env();

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap();
    let set_lang: Option<String> = args.opt_value_from_str("--set-lang").unwrap();

    let mut localizer = Localizer::new(lang, Preferences::default());

    if let Some(code) = set_lang {
        match code.parse::<LanguageIdentifier>() {
            Ok(locale) => localizer.set_locale(locale),
            Err(_) => eprintln!("Unrecognized language code: {}", code),
        }
    }

    let keys: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect();

    if keys.is_empty() {
        println!("{}", localizer.tr("select-language-label"));
        for locale in &localizer.available_locales {
            let marker = if locale == localizer.current_locale() {
                "*"
            } else {
                " "
            };
            println!(
                "{} {} ({})",
                marker,
                localizer.language_display_name(locale),
                locale
            );
        }
    } else {
        for key in &keys {
            println!("{}", localizer.tr(key));
        }
    }
}
