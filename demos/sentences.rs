use bnf_gen::{Generator, GeneratorConfig, Grammar};
use std::error::Error;

const SENTENCES: &str = r#"
# English-like sentences
<s>::=<np> <vp>
<np>::=<dp> <adjp> <n>|<pn>
<dp>::=the|a
<adjp>::=<adj>|<adj> <adjp>
<adj>::=big|fat|green|wonderful|faulty|subliminal|pretentious
<n>::=dog|cat|man|university|father|mother|child|television
<pn>::=John|Jane|Sally|Spot|Fred|Elmo
<vp>::=<tv> <np>|<iv>
<tv>::=hit|honored|kissed|helped
<iv>::=died|collapsed|laughed|wept
"#;

/// Generate sentences and arithmetic expressions from small grammars
fn main() -> Result<(), Box<dyn Error>> {
    // Example 1: a grammar parsed from a block of rule text
    let grammar: Grammar = SENTENCES.parse()?;
    println!("Symbols: {}", grammar);

    let mut generator = Generator::new(&grammar);
    println!("\nGenerated sentences:");
    for (i, sentence) in generator.generate("<s>", 5)?.iter().enumerate() {
        println!("{}. {}", i + 1, sentence);
    }

    // Example 2: a recursive grammar with a seeded, depth-guarded generator
    let expressions = Grammar::new([
        "E::=T|T OP E",
        "T::=x|y|42|( E )",
        "OP::=+|-|*|/",
    ])?;
    let config = GeneratorConfig::from_json(r#"{"max_recursion_depth": 40, "seed": 7}"#)?;
    let mut generator = Generator::with_config(&expressions, &config);

    println!("\nGenerated expressions:");
    for i in 1..=5 {
        match generator.generate("E", 1) {
            Ok(mut texts) => println!("{}. {}", i, texts.remove(0)),
            Err(e) => println!("{}. <{}>", i, e),
        }
    }

    Ok(())
}
