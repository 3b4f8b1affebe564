//! Static source texts used across harnesses.
//!
//! The corpus is laid out so that each broadening path has a word that takes
//! it (counts are with the default policy, ceiling 20 and enough 5):
//!
//! | Query    | Rhyme      | Count | Path |
//! |----------|------------|-------|------|
//! | `cat`    | `AE1T`     | 3     | 6 words at once, no widening |
//! | `moon`   | `UW1N`     | 3     | 3 words, then +1 at 4, +3 at 5, +1 at 6, stop at 7 |
//! | `light`  | `AY1T`     | 3     | 2 words, then +1 at 4, stop at 5 |
//! | `scat`   | `AE1T`     | 4     | nothing at 4 or above: exhausted |
//! | `orange` | `AH0NJH`   | 5     | nothing anywhere: exhausted |
//! | `psst`   | ``         | 4     | no vowel: exhausted |
//!
//! `VAT` is in the dictionary but not the wordlist, so it never surfaces.

use rhymer_core::{Lexicon, SourceTexts};

pub const CORPUS_PRONUNCIATIONS: &str = "\
CAT\tK AE1 T
BAT\tB AE1 T
HAT\tHH AE1 T
MAT\tM AE1 T
PAT\tP AE1 T
RAT\tR AE1 T
SAT\tS AE1 T
VAT\tV AE1 T
SCAT\tS K AE1 T
MOON\tM UW1 N
SOON\tS UW1 N
NOON\tN UW1 N
TUNE\tT UW1 N
SPOON\tS P UW1 N
BALLOON\tB AH0 L UW1 N
LAGOON\tL AH0 G UW1 N
RACCOON\tR AE0 K UW1 N
CARTOON\tK AA0 R T UW1 N
ORANGE\tAO1 R AH0 N JH
LIGHT\tL AY1 T
NIGHT\tN AY1 T
KITE\tK AY1 T
BRIGHT\tB R AY1 T
PSST\tP S S T
HMM\tHH M
";

pub const CORPUS_SYMBOLS: &str = "\
AA0\tvowel
AE0\tvowel
AE1\tvowel
AH0\tvowel
AO1\tvowel
AY1\tvowel
UW1\tvowel
B\tstop
G\tstop
HH\taspirate
JH\taffricate
K\tstop
L\tliquid
M\tnasal
N\tnasal
P\tstop
R\tliquid
S\tfricative
T\tstop
V\tfricative
";

pub const CORPUS_WORDLIST: &str = "\
cat\tnoun
bat\tnoun
hat\tnoun
mat\tnoun
pat\tverb
rat\tnoun
sat\tverb
scat\tverb
moon\tnoun
soon\tadverb
noon\tnoun
tune\tnoun
spoon\tnoun
balloon\tnoun
lagoon\tnoun
raccoon\tnoun
cartoon\tnoun
orange\tnoun
light\tnoun
night\tnoun
kite\tnoun
bright\tadjective
psst\tinterjection
hmm\tinterjection
";

pub fn corpus_texts() -> SourceTexts {
    SourceTexts {
        pronunciations: CORPUS_PRONUNCIATIONS.to_string(),
        symbols: CORPUS_SYMBOLS.to_string(),
        wordlist: CORPUS_WORDLIST.to_string(),
    }
}

pub fn corpus_lexicon() -> Lexicon {
    Lexicon::from_texts(&corpus_texts()).expect("corpus fixtures must parse")
}

/// Write the three corpus sources into `dir` and return their paths
/// (pronunciations, symbols, wordlist).
pub fn write_corpus(
    dir: &std::path::Path,
) -> std::io::Result<(std::path::PathBuf, std::path::PathBuf, std::path::PathBuf)> {
    let dict = dir.join("phonetic_dict.txt");
    let symbols = dir.join("phonetic_symbols.txt");
    let wordlist = dir.join("wordlist.txt");
    std::fs::write(&dict, CORPUS_PRONUNCIATIONS)?;
    std::fs::write(&symbols, CORPUS_SYMBOLS)?;
    std::fs::write(&wordlist, CORPUS_WORDLIST)?;
    Ok((dict, symbols, wordlist))
}
