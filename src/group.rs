//! Standardized finite-field Diffie-Hellman (FFDHE) groups.
//!
//! Each group is an immutable (prime modulus, generator) pair from RFC 7919,
//! selected by the bit length of the prime. The table is parsed once into
//! process-wide statics and never mutated; the only mutable state in this
//! crate is the caller-provided RNG.
//!
//! Reference: <https://datatracker.ietf.org/doc/rfc7919/>

use crate::Error;
use num_bigint::BigUint;
use std::sync::LazyLock;

/// An FFDHE group over which the cryptosystem operates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Bit length of the prime modulus.
    pub bits: u32,
    /// The prime modulus.
    pub prime: BigUint,
    /// A generator of the multiplicative group modulo the prime.
    pub generator: BigUint,
    /// Estimated symmetric-equivalent security level, in bits.
    pub security: u32,
}

/// The ffdhe2048 group (security level: 103 bits).
static FFDHE_2048: LazyLock<Group> = LazyLock::new(|| {
    parse(
        2048,
        "32317006071311007300153513477825163362488057133489075174588434139269806834136210002792056362640164685458556357935330816928829023080573472625273554742461245741026202527916572972862706300325263428213145766931414223654220941111348629991657478268034230553086349050635557712219187890332729569696129743856241741236237225197346402691855797767976823014625397933058015226858730761197532436467475855460715043896844940366130497697812854295958659597567051283852132784468522925504568272879113720098931873959143374175837826000278034973198552060607533234122603254684088120031105907484281003994966956119696956248629032338072839127039",
        103,
    )
});

/// The ffdhe3072 group (security level: 125 bits).
static FFDHE_3072: LazyLock<Group> = LazyLock::new(|| {
    parse(
        3072,
        "5809605995369958062758586654274580047791722104970656507438869740087793294939022179753100900150316602414836960597893531254315756065700170507943025794723871619068282822579148207659984331724286057133800207014820356957933334364535176201393094406964280368146360322417397201921556656310696298417414318434929392806928868314831784332237038568260988712237196665742900353512788403877776568945491183287529096888884348887176901995757588549340219807606149955056871781046117195453427070254533858964729101754281121787330325506574928503501334937579191349178901801866451262831560570379780282604068262795024384318599710948857446185134652829941527736472860172354516733867877780829051346167153594329592339252295871976889069885964128038593002336846153522149026229984394781638501125312676451837144945451331832522946684620954184360294871798125320434686136230055213248587935623124338652624786221871129902570119964134282018641257113252046271726747647",
        125,
    )
});

/// The ffdhe4096 group (security level: 150 bits).
static FFDHE_4096: LazyLock<Group> = LazyLock::new(|| {
    parse(
        4096,
        "1044388881413152506673611132423542708364181673367771525125030890756881099188024532056304793061869328458723091803972939229793654985168401497491717574483844225116618212565649899896238061528255690984013755361148305106047581812557457571303413897964307070369153233034916545609049161117676542252417034306148432734874401682098205055813065377495410934435776008569464677021023433005437163880753068613673525551966829473007537177831003494630326494021352410947409155250518131329542947165352164089215019548909074312164647627938366550236314760864116934087960021077839688388383033906117940935023026686459274599124189299486771919466921436930468113859003854695674493896608503326776616230412252016237753188005160515672431703429026925450722225213972891936880551722374424500117253400391608019951133386097176734162660461073160502839490488652900367939577292447038637156268014222959401811270825513710710113193757653852931049810187522670964988718456427706279024201400130351029277257873323362974483425793829163819060563081096261611614988801585554385004830748976181157545121697905898543562330970182151097394600286811868072516047394404389555706298311761588649133904051123770516767707951778179308436153604841663369568605395358405635911568855382987714763476172799",
        150,
    )
});

impl Group {
    /// Looks up the group for the given prime bit length.
    ///
    /// Only 2048, 3072, and 4096 are standardized; any other value is
    /// rejected before any computation takes place.
    pub fn by_bits(bits: u32) -> Result<&'static Group, Error> {
        match bits {
            2048 => Ok(&FFDHE_2048),
            3072 => Ok(&FFDHE_3072),
            4096 => Ok(&FFDHE_4096),
            _ => Err(Error::UnsupportedBitLength(bits)),
        }
    }
}

fn parse(bits: u32, prime: &str, security: u32) -> Group {
    let prime = BigUint::parse_bytes(prime.as_bytes(), 10)
        .expect("Impossible: malformed FFDHE prime constant");
    Group {
        bits,
        prime,
        generator: BigUint::from(2u32),
        security,
    }
}
