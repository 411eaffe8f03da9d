use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Cyrillic-aware slug generator. Each Cyrillic letter is transliterated
/// through a fixed table; everything else is left to the generic
/// slugifier, which lowercases, strips punctuation, and hyphenates.
#[derive(Default, Clone)]
pub struct TransliteratingSlugGenerator;

fn transliterate(c: char) -> Option<&'static str> {
    Some(match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ы' => "yi",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        // Hard and soft signs disappear entirely.
        'ь' | 'ъ' => "",
        _ => return None,
    })
}

impl SlugGenerator for TransliteratingSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        let mut mapped = String::with_capacity(lowered.len());
        for c in lowered.chars() {
            match transliterate(c) {
                Some(replacement) => mapped.push_str(replacement),
                None => mapped.push(c),
            }
        }
        slugify(mapped)
    }
}
