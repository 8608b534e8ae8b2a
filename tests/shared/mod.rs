use sswcleaner::{Cleaner, CorrectionTable, Stopwords, TableKind};

pub(crate) fn get_test_corpus() -> Vec<String> {
    vec![
        "Sawubona!!! http://x.co 😀 <b>bold</b>",
        "yeeeess bro, ngiyabonga kakhulu :)",
        "Ngiya teng namhlanje www.shop.sz/sale",
        "LOL 2day ngi4 ekhaya <i>manje</i>",
        "Unjani mngani?? Ngiyaphila ;-P",
        "   Lalela    mine \t\n kahle   ",
        "Ngifuna i-phone lensha 😍😍 =D",
        "Gud morning babe, ngiyakutsandza sooooo much",
        "Kuyashisa lamuhla <br/> 35 degrees!!!",
        "",
        "😀🔥💯",
        "Yebo yebo yeeeebo!!!",
        "<p>Siyabonga</p> <a href=\"https://x.y\">link</a>",
        "Café naïve école — siSwati",
        "Hhayi bo! :( Angati",
    ]
    .iter()
    .map(|document| document.to_string())
    .collect::<Vec<_>>()
}

pub(crate) fn get_test_cleaner() -> Cleaner {
    let slang = CorrectionTable::new(
        TableKind::Slang,
        [("loli", "kuhleka kakhulu"), ("gudi", "kuhle"), ("babe", "sitsandzwa")],
    )
    .unwrap();

    let typos = CorrectionTable::new(
        TableKind::Typo,
        [("tengi", "tenga"), ("ngi4i", "ngiphumile"), ("mngani", "mngane")],
    )
    .unwrap();

    let borrowed = CorrectionTable::new(
        TableKind::Borrowed,
        [("phone", "lucingo"), ("degresi", "emadigri"), ("morningi", "ekuseni")],
    )
    .unwrap();

    let stopwords = Stopwords::english().union(Stopwords::new(["bro", "futsi", "kodvwa"]));

    Cleaner::builder()
        .slang(slang)
        .typos(typos)
        .borrowed(borrowed)
        .stopwords(stopwords)
        .build()
        .unwrap()
}
