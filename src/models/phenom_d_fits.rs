//! Calibrated fits behind IMRPhenomD.
//!
//! - remnant spin and radiated energy as functions of `η` and the aligned spins
//! - the 19 phenomenological coefficients, each an 11-term polynomial in
//!   `η` and `ξ = χ_PN - 1`

use crate::math::{Real, c};

/// Coefficients of `c0 + c1 η + (c2 + c3 η + c4 η²) ξ + (c5 + c6 η + c7 η²) ξ² + (c8 + c9 η + c10 η²) ξ³`.
pub type FitCoefficients = [f64; 11];

pub const RHO1: FitCoefficients = [
    3931.8979897196696, -17395.758706812805, 3132.375545898835, 343965.86092361377,
    -1.2162565819981997e6, -70698.00600428853, 1.383907177859705e6, -3.9662761890979446e6,
    -60017.52423652596, 803515.1181825735, -2.091710365941658e6,
];

pub const RHO2: FitCoefficients = [
    -40105.47653771657, 112253.0169706701, 23561.696065836168, -3.476180699403351e6,
    1.137593670849482e7, 754313.1127166454, -1.308476044625268e7, 3.6444584853928134e7,
    596226.612472288, -7.4277901143564405e6, 1.8928977514040343e7,
];

pub const RHO3: FitCoefficients = [
    83208.35471266537, -191237.7264145924, -210916.2454782992, 8.71797508352568e6,
    -2.6914942420669552e7, -1.9889806527362722e6, 3.0888029960154563e7, -8.390870279256162e7,
    -1.4535031953446497e6, 1.7063528990822166e7, -4.2748659731120914e7,
];

/// Collocation value of the intermediate amplitude at the interval midpoint.
pub const V2: FitCoefficients = [
    0.8149838730507785, 2.5747553517454658, 1.1610198035496786, -2.3627771785551537,
    6.771038707057573, 0.7570782938606834, -2.7256896890432474, 7.1140380397149965,
    0.1766934149293479, -0.7978690983168183, 2.1162391502005153,
];

pub const GAMMA1: FitCoefficients = [
    0.006927402739328343, 0.03020474290328911, 0.006308024337706171, -0.12074130661131138,
    0.26271598905781324, 0.0034151773647198794, -0.10779338611188374, 0.27098966966891747,
    0.0007374185938559283, -0.02749621038376281, 0.0733150789135702,
];

pub const GAMMA2: FitCoefficients = [
    1.010344404799477, 0.0008993122007234548, 0.283949116804459, -4.049752962958005,
    13.207828172665366, 0.10396278486805426, -7.025059158961947, 24.784892370130475,
    0.03093202475605892, -2.6924023896851663, 9.609374464684983,
];

pub const GAMMA3: FitCoefficients = [
    1.3081615607036106, -0.005537729694807678, -0.06782917938621007, -0.6689834970767117,
    3.403147966134083, -0.05296577374411866, -0.9923793203111362, 4.820681208409587,
    -0.006134139870393713, -0.38429253308696365, 1.7561754421985984,
];

pub const SIGMA1: FitCoefficients = [
    2096.551999295543, 1463.7493168261553, 1312.5493286098522, 18307.330017082117,
    -43534.1440746107, -833.2889543511114, 32047.31997183187, -108609.45037520859,
    452.25136398112204, 8353.439546391714, -44531.3250037322,
];

pub const SIGMA2: FitCoefficients = [
    -10114.056472621156, -44631.01109458185, -6541.308761668722, -266959.23419307504,
    686328.3229317984, 3405.6372187679685, -437507.7208209015, 1.6318171307344697e6,
    -7462.648563007646, -114585.25177153319, 674402.4689098676,
];

pub const SIGMA3: FitCoefficients = [
    22933.658273436497, 230960.00814979506, 14961.083974183695, 1.1940181342318142e6,
    -3.1042239693052764e6, -3038.166617199259, 1.8720322849093592e6, -7.309145012085539e6,
    42738.22871475411, 467502.018616601, -3.064853498512499e6,
];

pub const SIGMA4: FitCoefficients = [
    -14621.71522218357, -377812.8579387104, -9608.682631509726, -1.7108925257214056e6,
    4.332924601416521e6, -22366.683262266528, -2.5019716386377467e6, 1.0274495902259542e7,
    -85360.30079034246, -570025.3441737515, 4.396844346849777e6,
];

pub const BETA1: FitCoefficients = [
    97.89747327985583, -42.659730877489224, 153.48421037904913, -1417.0620760768954,
    2752.8614143665027, 138.7406469558649, -1433.6585075135881, 2857.7418952430758,
    41.025109467376126, -423.680737974639, 850.3594335657173,
];

pub const BETA2: FitCoefficients = [
    -3.282701958759534, -9.051384468245866, -12.415449742258042, 55.4716447709787,
    -106.05109938966335, -11.953044553690658, 76.80704618365418, -155.33172948098394,
    -3.4129261592393263, 25.572377569952536, -54.408036707740465,
];

pub const BETA3: FitCoefficients = [
    -0.000025156429818799565, 0.000019750256942201327, -0.000018370671469295915,
    0.000021886317041311973, 0.00008250240316860033, 7.157371250566708e-6,
    -0.000055780000112270685, 0.00019142082884072178, 5.447166261464217e-6,
    -0.00003220610095021982, 0.00007974016714984341,
];

pub const ALPHA1: FitCoefficients = [
    43.31514709695348, 638.6332679188081, -32.85768747216059, 2415.8938269370315,
    -5766.875169379177, -61.85459307173841, 2953.967762459948, -8986.29057591497,
    -21.571435779762044, 981.2158224673428, -3239.5664895930286,
];

pub const ALPHA2: FitCoefficients = [
    -0.07020209449091723, -0.16269798450687084, -0.1872514685185499, 1.138313650449945,
    -2.8334196304430046, -0.17137955686840617, 1.7197549338119527, -4.539717148261272,
    -0.049983437357548705, 0.6062072055948309, -1.682769616644546,
];

pub const ALPHA3: FitCoefficients = [
    9.5988072383479, -397.05438595557433, 16.202126189517813, -1574.8286986717037,
    3600.3410843831093, 27.092429659075467, -1786.482357315139, 5152.919378666511,
    11.175710130033895, -577.7999423177481, 1808.730762932043,
];

pub const ALPHA4: FitCoefficients = [
    -0.02989487384493607, 1.4022106448583738, -0.07356049468633846, 0.8337006542278661,
    0.2240008282397391, -0.055202870001177226, 0.5667186343606578, 0.7186931973380503,
    -0.015507437354325743, 0.15750322779277187, 0.21076815715176228,
];

pub const ALPHA5: FitCoefficients = [
    0.9974408278363099, -0.007884449714907203, -0.059046901195591035, 1.3958712396764088,
    -4.516631601676276, -0.05585343136869692, 1.7516580039343603, -5.990208965347804,
    -0.017945336522161195, 0.5965097794825992, -2.0608879367971804,
];

/// Evaluate one calibrated coefficient.
pub fn evaluate_fit<T: Real>(k: &FitCoefficients, eta: T, xi: T) -> T {
    let eta2 = eta * eta;
    let at = |a: usize| c::<T>(k[a]) + c::<T>(k[a + 1]) * eta + c::<T>(k[a + 2]) * eta2;
    c::<T>(k[0]) + c::<T>(k[1]) * eta + xi * (at(2) + xi * (at(5) + xi * at(8)))
}

/// Effective PN spin `χ_PN = χ_s (1 - 76η/113) + δ χ_a`, with `δ = (m1 - m2)/M`.
pub fn chi_pn<T: Real>(eta: T, seta: T, chi1: T, chi2: T) -> T {
    let chi_s = (chi1 + chi2) * c(0.5);
    let chi_a = (chi1 - chi2) * c(0.5);
    chi_s * (T::one() - c::<T>(76.0 / 113.0) * eta) + seta * chi_a
}

/// Dimensionless remnant spin for aligned spins. `m1`, `m2` normalized to `M = 1`.
pub fn final_spin_0815<T: Real>(eta: T, m1: T, m2: T, chi1: T, chi2: T) -> T {
    let s = m1 * m1 * chi1 + m2 * m2 * chi2;
    let (eta2, eta3) = (eta * eta, eta * eta * eta);
    let eta4 = eta3 * eta;
    let (s2, s3) = (s * s, s * s * s);
    let s4 = s3 * s;
    c::<T>(3.4641016151377544) * eta - c::<T>(4.399247300629289) * eta2
        + c::<T>(9.397292189321194) * eta3
        - c::<T>(13.180949901606242) * eta4
        + (T::one() - c::<T>(0.0850917821418767) * eta - c::<T>(5.837029316602263) * eta2) * s
        + (c::<T>(0.1014665242971878) * eta - c::<T>(2.0967746996832157) * eta2) * s2
        + (c::<T>(-1.3546806617824356) * eta + c::<T>(4.108962025369336) * eta2) * s3
        + (c::<T>(-0.8676969352555539) * eta + c::<T>(2.064046835273906) * eta2) * s4
}

/// Fraction of the total mass radiated. `m1`, `m2` normalized to `M = 1`.
pub fn radiated_energy_0815<T: Real>(eta: T, m1: T, m2: T, chi1: T, chi2: T) -> T {
    let (m1s, m2s) = (m1 * m1, m2 * m2);
    let s = (m1s * chi1 + m2s * chi2) / (m1s + m2s);
    let (eta2, eta3) = (eta * eta, eta * eta * eta);
    let num = eta
        * (c::<T>(0.055974469826360077) + c::<T>(0.5809510763115132) * eta
            - c::<T>(0.9606726679372312) * eta2
            + c::<T>(3.352411249771192) * eta3)
        * (T::one()
            + (c::<T>(-0.0030302335878845507) - c::<T>(2.0066110851351073) * eta
                + c::<T>(7.7050567802399215) * eta2)
                * s);
    let den = T::one()
        + (c::<T>(-0.6714403054720589) - c::<T>(1.4756929437702908) * eta
            + c::<T>(7.304676214885011) * eta2)
            * s;
    num / den
}
