//! Fundamental (l = m = 2, n = 0) Kerr quasinormal-mode frequencies.
//!
//! Tabulated from Leaver's continued-fraction solution for spin weight −2,
//! with knots every 0.005 in spin, tightening to 0.001 above 0.95 and 0.0005
//! above 0.995 where the frequencies steepen. Values are in units of the
//! remnant mass and are interpolated with a natural cubic spline. Spins outside
//! the table are clamped to its ends.

use std::sync::LazyLock;

use crate::math::{NaturalSpline, Real, c};

const QNM_LEN: usize = 443;

static RING_SPLINE: LazyLock<Option<NaturalSpline>> =
    LazyLock::new(|| NaturalSpline::new(&SPIN, &RING));
static DAMP_SPLINE: LazyLock<Option<NaturalSpline>> =
    LazyLock::new(|| NaturalSpline::new(&SPIN, &DAMP));

fn interpolate<T: Real>(spline: &Option<NaturalSpline>, final_spin: T) -> T {
    let (lo, hi) = (SPIN[0], SPIN[QNM_LEN - 1]);
    let spin = final_spin.max_of(c(lo)).min_of(c(hi));
    match spline {
        Some(s) => s.eval(spin),
        None => T::nan(),
    }
}

/// Ringdown frequency `Re(Mω)/2π` of the 22 QNM, in units of the remnant mass.
pub fn fring<T: Real>(final_spin: T) -> T {
    interpolate(&RING_SPLINE, final_spin)
}

/// Damping frequency `|Im(Mω)|/2π` of the 22 QNM, in units of the remnant mass.
pub fn fdamp<T: Real>(final_spin: T) -> T {
    interpolate(&DAMP_SPLINE, final_spin)
}

/// Dimensionless remnant spin at each knot.
const SPIN: [f64; QNM_LEN] = [
    -0.995, -0.99, -0.985, -0.98, -0.975, -0.97, -0.965, -0.96, -0.955, -0.95,
    -0.945, -0.94, -0.935, -0.93, -0.925, -0.92, -0.915, -0.91, -0.905, -0.9,
    -0.895, -0.89, -0.885, -0.88, -0.875, -0.87, -0.865, -0.86, -0.855, -0.85,
    -0.845, -0.84, -0.835, -0.83, -0.825, -0.82, -0.815, -0.81, -0.805, -0.8,
    -0.795, -0.79, -0.785, -0.78, -0.775, -0.77, -0.765, -0.76, -0.755, -0.75,
    -0.745, -0.74, -0.735, -0.73, -0.725, -0.72, -0.715, -0.71, -0.705, -0.7,
    -0.695, -0.69, -0.685, -0.68, -0.675, -0.67, -0.665, -0.66, -0.655, -0.65,
    -0.645, -0.64, -0.635, -0.63, -0.625, -0.62, -0.615, -0.61, -0.605, -0.6,
    -0.595, -0.59, -0.585, -0.58, -0.575, -0.57, -0.565, -0.56, -0.555, -0.55,
    -0.545, -0.54, -0.535, -0.53, -0.525, -0.52, -0.515, -0.51, -0.505, -0.5,
    -0.495, -0.49, -0.485, -0.48, -0.475, -0.47, -0.465, -0.46, -0.455, -0.45,
    -0.445, -0.44, -0.435, -0.43, -0.425, -0.42, -0.415, -0.41, -0.405, -0.4,
    -0.395, -0.39, -0.385, -0.38, -0.375, -0.37, -0.365, -0.36, -0.355, -0.35,
    -0.345, -0.34, -0.335, -0.33, -0.325, -0.32, -0.315, -0.31, -0.305, -0.3,
    -0.295, -0.29, -0.285, -0.28, -0.275, -0.27, -0.265, -0.26, -0.255, -0.25,
    -0.245, -0.24, -0.235, -0.23, -0.225, -0.22, -0.215, -0.21, -0.205, -0.2,
    -0.195, -0.19, -0.185, -0.18, -0.175, -0.17, -0.165, -0.16, -0.155, -0.15,
    -0.145, -0.14, -0.135, -0.13, -0.125, -0.12, -0.115, -0.11, -0.105, -0.1,
    -0.095, -0.09, -0.085, -0.08, -0.075, -0.07, -0.065, -0.06, -0.055, -0.05,
    -0.045, -0.04, -0.035, -0.03, -0.025, -0.02, -0.015, -0.01, -0.005, 0.0,
    0.005, 0.01, 0.015, 0.02, 0.025, 0.03, 0.035, 0.04, 0.045, 0.05,
    0.055, 0.06, 0.065, 0.07, 0.075, 0.08, 0.085, 0.09, 0.095, 0.1,
    0.105, 0.11, 0.115, 0.12, 0.125, 0.13, 0.135, 0.14, 0.145, 0.15,
    0.155, 0.16, 0.165, 0.17, 0.175, 0.18, 0.185, 0.19, 0.195, 0.2,
    0.205, 0.21, 0.215, 0.22, 0.225, 0.23, 0.235, 0.24, 0.245, 0.25,
    0.255, 0.26, 0.265, 0.27, 0.275, 0.28, 0.285, 0.29, 0.295, 0.3,
    0.305, 0.31, 0.315, 0.32, 0.325, 0.33, 0.335, 0.34, 0.345, 0.35,
    0.355, 0.36, 0.365, 0.37, 0.375, 0.38, 0.385, 0.39, 0.395, 0.4,
    0.405, 0.41, 0.415, 0.42, 0.425, 0.43, 0.435, 0.44, 0.445, 0.45,
    0.455, 0.46, 0.465, 0.47, 0.475, 0.48, 0.485, 0.49, 0.495, 0.5,
    0.505, 0.51, 0.515, 0.52, 0.525, 0.53, 0.535, 0.54, 0.545, 0.55,
    0.555, 0.56, 0.565, 0.57, 0.575, 0.58, 0.585, 0.59, 0.595, 0.6,
    0.605, 0.61, 0.615, 0.62, 0.625, 0.63, 0.635, 0.64, 0.645, 0.65,
    0.655, 0.66, 0.665, 0.67, 0.675, 0.68, 0.685, 0.69, 0.695, 0.7,
    0.705, 0.71, 0.715, 0.72, 0.725, 0.73, 0.735, 0.74, 0.745, 0.75,
    0.755, 0.76, 0.765, 0.77, 0.775, 0.78, 0.785, 0.79, 0.795, 0.8,
    0.805, 0.81, 0.815, 0.82, 0.825, 0.83, 0.835, 0.84, 0.845, 0.85,
    0.855, 0.86, 0.865, 0.87, 0.875, 0.88, 0.885, 0.89, 0.895, 0.9,
    0.905, 0.91, 0.915, 0.92, 0.925, 0.93, 0.935, 0.94, 0.945, 0.95,
    0.951, 0.952, 0.953, 0.954, 0.955, 0.956, 0.957, 0.958, 0.959, 0.96,
    0.961, 0.962, 0.963, 0.964, 0.965, 0.966, 0.967, 0.968, 0.969, 0.97,
    0.971, 0.972, 0.973, 0.974, 0.975, 0.976, 0.977, 0.978, 0.979, 0.98,
    0.981, 0.982, 0.983, 0.984, 0.985, 0.986, 0.987, 0.988, 0.989, 0.99,
    0.991, 0.992, 0.993, 0.994, 0.995, 0.9955, 0.996, 0.9965, 0.997, 0.9975,
    0.998, 0.9985, 0.999,
];

/// `Re(Mω)/2π` at each knot.
const RING: [f64; QNM_LEN] = [
    0.04644613241026869, 0.046490224991872955, 0.04653445351638883, 0.046578818731801745,
    0.04662332139195789, 0.04666796225662155, 0.04671274209153322, 0.04675766166846872,
    0.04680272176529855, 0.04684792316604728, 0.04689326666095482, 0.04693875304653747,
    0.04698438312564974, 0.04703015770754766, 0.0470760776079513, 0.0471221436491094,
    0.047168356659864026, 0.04721471747571575, 0.04726122693889016, 0.047307885898404546,
    0.04735469521013562, 0.04740165573688782, 0.047448768348462574, 0.04749603392172792,
    0.047543453340689365, 0.04759102749656137, 0.04763875728783931, 0.04768664362037275,
    0.047734687407439164, 0.04778288956981873, 0.04783125103586975, 0.04787977274160514,
    0.04792845563076977, 0.047977300654918585, 0.04802630877349581, 0.04807548095391511,
    0.04812481817164053, 0.0481743214102687, 0.04822399166161204, 0.04827382992578263,
    0.04832383721127781, 0.048374014535066415, 0.048424362922676364, 0.048474883408283244,
    0.048525577034800434, 0.0485764448539701, 0.04862748792645575, 0.048678707321935924,
    0.04873010411919926, 0.048781679406241035, 0.04883343428036104, 0.0488853698482628,
    0.04893748722615452, 0.04898978753985137, 0.049042271924879255, 0.04909494152658042,
    0.04914779750022044, 0.04920084101109704, 0.04925407323465046, 0.04930749535657569,
    0.04936110857293634, 0.04941491409028051, 0.0494689131257582, 0.04952310690724093,
    0.04957749667344309, 0.049632083674045216, 0.04968686916981937, 0.049741854432756465,
    0.0497970407461958, 0.04985242940495636, 0.04990802171547078, 0.04996381899592098,
    0.05001982257637636, 0.05007603379893422, 0.05013245401786222, 0.05018908459974352,
    0.05024592692362425, 0.05030298238116314, 0.050360252376784015, 0.0504177383278305,
    0.05047544166472341, 0.0505333638311208, 0.050591506284080635, 0.05064987049422595,
    0.05070845794591321, 0.05076727013740296, 0.05082630858103379, 0.05088557480339875,
    0.050945070345525076, 0.051004796763056755, 0.05106475562644012, 0.05112494852111257,
    0.051185377047694616, 0.0512460428221848, 0.051306947476158334, 0.051368092656968616,
    0.051429480027952564, 0.05149111126863912, 0.051552988074961385, 0.051615112159472405,
    0.051677485251564445, 0.051740109097692194, 0.05180298546159954, 0.05186611612455044,
    0.051929502885563604, 0.051993147561651076, 0.052057051988061175, 0.05212121801852536,
    0.05218564752550951, 0.05225034240046943, 0.05231530455411073, 0.052380535916653405,
    0.05244603843810072, 0.052511814088513076, 0.052577864858286395, 0.052644192758435425,
    0.05271079982088211, 0.05277768809874895, 0.05284485966665753, 0.0529123166210323,
    0.052980061080409695, 0.05304809518575291, 0.053116421100771985, 0.053185041012249926,
    0.053253957130374396, 0.05332317168907545, 0.05339268694636947, 0.053462505184709026,
    0.05353262871133938, 0.05360305985866117, 0.0536738009846, 0.05374485447298245,
    0.053816222733919304, 0.05388790820419558, 0.053959913347667844, 0.054032240655668876,
    0.05410489264741987, 0.05417787187045022, 0.054251180901025264, 0.054324822344581934,
    0.05439879883617275, 0.054473113040917995, 0.054547767654466686, 0.054622765403466084,
    0.05469810904604028, 0.05477380137227798, 0.05484984520472957, 0.054926243398913804,
    0.055002998843834326, 0.05508011446250614, 0.05515759321249239, 0.055235438086451774,
    0.05531365211269639, 0.05539223835576098, 0.055471199916983, 0.05555053993509469,
    0.05563026158682652, 0.05571036808752291, 0.055790862691770415, 0.05587174869403836,
    0.055953029429332654, 0.0560347082738627, 0.056116788645722046, 0.05619927400558307,
    0.056282167857405654, 0.05636547374916082, 0.0564491952735692, 0.05653333606885488,
    0.056617899819515156, 0.056702890257106196, 0.05678831116104549, 0.05687416635943124,
    0.05696045972987905, 0.05704719520037665, 0.05713437675015678, 0.0572220084105889,
    0.0573100942660904, 0.05739863845505713, 0.05748764517081475, 0.05757711866259046,
    0.05766706323650643, 0.05775748325659493, 0.057848383145836166, 0.05793976738721914,
    0.05803164052482629, 0.05812400716494236, 0.05821687197718865, 0.0583102396956827,
    0.05840411512022439, 0.05849850311750943, 0.0585934086223705, 0.05868883663904714,
    0.05878479224248515, 0.05888128057966627, 0.05897830687096883, 0.059075876411560764,
    0.05917399457282503, 0.059272666803819485, 0.05937189863277109, 0.05947169566860612,
    0.059572063602517364, 0.059673008209569035, 0.0597745353503408, 0.059876650972612,
    0.059979361113087284, 0.060082671899164615, 0.060186589550747384, 0.06029112038210145,
    0.06039627080375889, 0.060502047324469496, 0.060608456553201705, 0.060715505201194474,
    0.060823200084061384, 0.060931548123949, 0.06104055635175089, 0.0611502319093789,
    0.061260582052094024, 0.061371614150898014, 0.061483335694988275, 0.06159575429427782,
    0.061708877681981994, 0.06182271371727494, 0.06193727038801724, 0.06205255581355751,
    0.06216857824761033, 0.062285346081212535, 0.06240286784576136, 0.06252115221613624,
    0.06264020801390766, 0.06276004421063548, 0.06288066993126054, 0.06300209445759163,
    0.06312432723189199, 0.0632473778605684, 0.06337125611796635, 0.06349597195027507,
    0.06362153547954613, 0.06374795700783005, 0.06387524702143423, 0.06400341619530743,
    0.06413247539755482, 0.06426243569408835, 0.06439330835341743, 0.06452510485158497,
    0.06465783687725415, 0.06479151633695154, 0.06492615536047219, 0.06506176630645284,
    0.06519836176811968, 0.06533595457921712, 0.06547455782012439, 0.06561418482416748,
    0.06575484918413353, 0.065896564758996, 0.06603934568085829, 0.0661832063621251,
    0.06632816150290985, 0.06647422609868803, 0.06662141544820631, 0.06676974516165747,
    0.06691923116913229, 0.06706988972935951, 0.06722173743874608, 0.06737479124072965,
    0.06752906843545686, 0.0676845866898011, 0.06784136404773375, 0.06799941894106462,
    0.0681587702005669, 0.068319437067504, 0.068481439205575, 0.06864479671329812,
    0.06880953013685075, 0.0689756604833871, 0.06914320923485488, 0.06931219836233332,
    0.06948265034091701, 0.06965458816517017, 0.06982803536517841, 0.07000301602322542,
    0.07017955479112499, 0.07035767690823853, 0.07053740822021198, 0.07071877519846655,
    0.07090180496048008, 0.07108652529089829, 0.07127296466351682, 0.07146115226417812,
    0.07165111801462909, 0.07184289259738885, 0.0720365074816784, 0.07223199495046748,
    0.07242938812869713, 0.0726287210127402, 0.07283002850116596, 0.07303334642687884,
    0.07323871159070658, 0.07344616179651674, 0.07365573588794691, 0.07386747378683874,
    0.07408141653347193, 0.07429760632870147, 0.07451608657810739, 0.07473690193827466,
    0.07496009836532865, 0.07518572316585978, 0.07541382505038194, 0.07564445418947739,
    0.07587766227279423, 0.07611350257107266, 0.07635203000139036, 0.07659330119583141,
    0.07683737457379786, 0.07708431041820098, 0.07733417095578618, 0.07758702044186638,
    0.07784292524976014, 0.07810195396525377, 0.078364177486434, 0.07862966912926407,
    0.07889850473930957, 0.07917076281005181, 0.07944652460826582, 0.07972587430698001,
    0.08000889912658012, 0.08029568948466982, 0.08058633915535453, 0.08088094543867708,
    0.08117960934099894, 0.08148243576719683, 0.08178953372562554, 0.08210101654688959,
    0.08241700211756837, 0.08273761313015233, 0.08306297735057383, 0.08339322790485824,
    0.08372850358657812, 0.08406894918697065, 0.08441471584977785, 0.08476596145309187,
    0.08512285102074128, 0.08548555716603785, 0.08585426057102635, 0.08622915050474514,
    0.08661042538442071, 0.08699829338399169, 0.08739297309489791, 0.08779469424468697,
    0.08820369847969899, 0.08862024021890284, 0.08904458758689614, 0.08947702343516359,
    0.08991784646194506, 0.09036737244252348, 0.09082593558344453, 0.0912938900161698,
    0.09177161144799953, 0.0922594989908496, 0.09275797719171536, 0.09326749829250593,
    0.09378854475151903, 0.09432163206430821, 0.0948673119282774, 0.09542617580327664,
    0.09599885893009452, 0.09658604488045894, 0.09718847072650509, 0.0978069329353304,
    0.09844229411612693, 0.09909549077463708, 0.09976754226386206, 0.10045956116313294,
    0.1011727653726039, 0.10190849228071218, 0.10266821545333331, 0.10345356441240035,
    0.10426634822868958, 0.10510858386255402, 0.10598253046812862, 0.10689073126089907,
    0.10783606507998883, 0.10882181052221414, 0.10985172658818325, 0.11093015532375725,
    0.11206215422388532, 0.11325366962025633, 0.11451176762891764, 0.11584494776673725,
    0.11726357837673285, 0.11878051692413649, 0.11909705892054223, 0.11941831822449134,
    0.1197444525367059, 0.12007562817885364, 0.12041202076008128, 0.12075381591097457,
    0.12110121009345332, 0.12145441149640823, 0.12181364102841657, 0.12217913342068751,
    0.12255113845554426, 0.12292992233832398, 0.12331576923366472, 0.12370898299086615,
    0.124109889087512, 0.12451883682601633, 0.12493620182444823, 0.12536238885122014,
    0.1257978350634025, 0.12624301372109453, 0.1266984384661482, 0.12716466827356004,
    0.1276423132092862, 0.12813204116082885, 0.12863458574905254, 0.12915075568459697,
    0.12968144590454725, 0.13022765092122524, 0.1307904809444411, 0.13137118151497612,
    0.1319711576307292, 0.13259200368844648, 0.13323554105030255, 0.13390386574964216,
    0.13459940989252206, 0.13532502188669382, 0.1360840730685613, 0.13688060218111817,
    0.13771951553395745, 0.138606871540243, 0.13955029762455606, 0.14055962352100315,
    0.1416478863423971, 0.14283301479958913, 0.14414085459002535, 0.14485238595740213,
    0.14561112856556274, 0.14642635351609218, 0.1473108039597444, 0.1482828404247415,
    0.14937066558225517, 0.15062179505232076, 0.15212895576021462,
];

/// `-Im(Mω)/2π` at each knot.
const DAMP: [f64; QNM_LEN] = [
    0.014011855106619618, 0.014013955001078418, 0.014016046754554716, 0.01401813030876208,
    0.014020205605104811, 0.014022272584677843, 0.014024331188266397, 0.014026381356345098,
    0.014028423029077117, 0.014030456146313968, 0.01403248064759457, 0.014034496472144503,
    0.01403650355887573, 0.014038501846385365, 0.014040491272955318, 0.014042471776551236,
    0.014044443294821804, 0.014046405765097943, 0.014048359124391755, 0.014050303309395691,
    0.0140522382564813, 0.014054163901698375, 0.014056080180773622, 0.014057987029109278,
    0.014059884381782007, 0.014061772173541081, 0.014063650338806966, 0.014065518811669621,
    0.014067377525886356, 0.014069226414880011, 0.014071065411736557, 0.01407289444920283,
    0.014074713459683752, 0.014076522375239618, 0.014078321127583069, 0.0140801096480756,
    0.014081887867724251, 0.014083655717177651, 0.014085413126722018, 0.01408716002627674,
    0.014088896345389708, 0.014090622013232395, 0.01409233695859451, 0.014094041109878492,
    0.014095734395093425, 0.014097416741848938, 0.014099088077348446, 0.014100748328382255,
    0.014102397421320254, 0.014104035282104209, 0.014105661836239774, 0.01410727700878805,
    0.014108880724356856, 0.014110472907091607, 0.01411205348066581, 0.014113622368271213,
    0.014115179492607587, 0.014116724775872124, 0.014118258139748447, 0.014119779505395365,
    0.014121288793435103, 0.014122785923941256, 0.014124270816426454, 0.01412574338982944,
    0.014127203562502046, 0.014128651252195683, 0.014130086376047448, 0.01413150885056591,
    0.01413291859161664, 0.01413431551440719, 0.01413569953347191, 0.014137070562656279,
    0.014138428515101064, 0.014139773303225817, 0.014141104838712488, 0.014142423032488215,
    0.014143727794708105, 0.014145019034737532, 0.014146296661134126, 0.014147560581629377,
    0.014148810703109999, 0.014150046931598782, 0.014151269172235307, 0.014152477329256112,
    0.014153671305974648, 0.014154851004760875, 0.014156016327020373, 0.014157167173173299,
    0.01415830344263284, 0.014159425033783335, 0.014160531843958123, 0.014161623769416862,
    0.014162700705322677, 0.014163762545718687, 0.014164809183504457, 0.014165840510411757,
    0.014166856416980166, 0.01416785679253218, 0.014168841525147845, 0.0141698105016392,
    0.014170763607524084, 0.014171700726999635, 0.01417262174291534, 0.014173526536745666,
    0.014174414988562159, 0.014175286977005281, 0.014176142379255534, 0.014176981071004301,
    0.014177802926424213, 0.014178607818138823, 0.014179395617192048, 0.014180166193016907,
    0.014180919413403825, 0.014181655144468324, 0.014182373250618342, 0.01418307359452075,
    0.014183756037067497, 0.014184420437341068, 0.014185066652579395, 0.014185694538140144,
    0.014186303947464321, 0.014186894732039327, 0.014187466741361282, 0.014188019822896759,
    0.01418855382204368, 0.014189068582091712, 0.01418956394418176, 0.014190039747264776,
    0.014190495828059854, 0.014190932021011534, 0.014191348158246206, 0.01419174406952781,
    0.014192119582212667, 0.014192474521203405, 0.014192808708902053, 0.01419312196516221,
    0.014193414107240251, 0.01419368494974561, 0.014193934304590098, 0.01419416198093619,
    0.014194367785144255, 0.014194551520718801, 0.014194712988253538, 0.01419485198537544,
    0.014194968306687539, 0.014195061743710607, 0.014195132084823628, 0.014195179115203065,
    0.014195202616760747, 0.01419520236808056, 0.014195178144353731, 0.014195129717312743,
    0.01419505685516386, 0.014194959322518168, 0.014194836880321129, 0.014194689285780592,
    0.014194516292293242, 0.014194317649369419, 0.014194093102556272, 0.014193842393359166,
    0.014193565259161408, 0.014193261433142052, 0.01419293064419198, 0.014192572616827942,
    0.014192187071104697, 0.014191773722525133, 0.01419133228194829, 0.014190862455495204,
    0.014190363944452677, 0.01418983644517467, 0.014189279648981382, 0.014188693242055994,
    0.014188076905338909, 0.014187430314419441, 0.014186753139424964, 0.014186045044907312,
    0.014185305689726445, 0.014184534726931264, 0.014183731803637521, 0.014182896560902675,
    0.01418202863359772, 0.014181127650275705, 0.014180193233037106, 0.01417922499739168,
    0.014178222552116882, 0.01417718549911275, 0.014176113433252969, 0.01417500594223217,
    0.014173862606409357, 0.014172682998647176, 0.014171466684147059, 0.014170213220280092,
    0.014168922156413345, 0.014167593033731735, 0.014166225385055081, 0.014164818734650347,
    0.014163372598038822, 0.014161886481798117, 0.014160359883358856, 0.014158792290795792,
    0.014157183182613277, 0.014155532027524821, 0.014153838284226587, 0.014152101401164638,
    0.014150320816295681, 0.014148495956841187, 0.014146626239034545, 0.014144711067861093,
    0.01414274983679089, 0.01414074192750368, 0.014138686709606172, 0.014136583540341125,
    0.014134431764287988, 0.014132230713054883, 0.014129979704961609, 0.01412767804471339,
    0.014125325023064893, 0.014122919916474389, 0.014120461986747646, 0.014117950480671054,
    0.014115384629633871, 0.014112763649238934, 0.014110086738901621, 0.014107353081436541,
    0.014104561842631572, 0.014101712170808774, 0.014098803196371629, 0.01409583403133829,
    0.014092803768860117, 0.014089711482725127, 0.014086556226845699, 0.014083337034730015,
    0.014080052918936596, 0.01407670287051128, 0.01407328585840604, 0.01406980082887896,
    0.014066246704874554, 0.014062622385383732, 0.014058926744782721, 0.014055158632149966,
    0.014051316870560292, 0.01404740025635532, 0.01404340755838932, 0.014039337517249456,
    0.014035188844449431, 0.014030960221595418, 0.01402665029952333, 0.014022257697405996,
    0.014017781001829268, 0.014013218765835705, 0.014008569507934436, 0.014003831711075889,
    0.013999003821589907, 0.013994084248085646, 0.01398907136031184, 0.013983963487975424,
    0.013978758919517125, 0.01397345590084185, 0.013968052634002165, 0.013962547275832637,
    0.013956937936533052, 0.013951222678198124, 0.013945399513291427, 0.013939466403061056,
    0.013933421255894345, 0.013927261925608914, 0.013920986209677268, 0.013914591847381695,
    0.013908076517896481, 0.013901437838293904, 0.01389467336147058, 0.013887780573990326,
    0.013880756893839661, 0.013873599668091754, 0.013866306170474426, 0.013858873598837649,
    0.013851299072515522, 0.013843579629577649, 0.013835712223964557, 0.013827693722501113,
    0.013819520901782165, 0.013811190444923746, 0.013802698938173099, 0.013794042867370274,
    0.013785218614253612, 0.013776222452601178, 0.013767050544199246, 0.013757698934629027,
    0.013748163548861698, 0.013738440186651693, 0.013728524517717168, 0.013718412076696138,
    0.013708098257865904, 0.01369757830961267, 0.013686847328637444, 0.013675900253883284,
    0.013664731860168042, 0.013653336751505818, 0.013641709354098945, 0.013629843908981544,
    0.01361773446429374, 0.013605374867164993, 0.01359275875518284, 0.013579879547421963,
    0.0135667304350069, 0.013553304371179338, 0.01353959406083937, 0.013525591949527505,
    0.013511290211811891, 0.013496680739042633, 0.013481755126432154, 0.013466504659417393,
    0.013450920299256427, 0.013434992667808216, 0.0134187120314403, 0.013402068284004776,
    0.013385050928818303, 0.01336764905957645, 0.013349851340127138, 0.013331645983021572,
    0.013313020726754396, 0.013293962811597037, 0.013274458953920138, 0.013254495318891897,
    0.013234057491429021, 0.013213130445266003, 0.01319169850999655, 0.013169745335927043,
    0.01314725385656754, 0.01312420624856906, 0.013100583888897711, 0.01307636730901588,
    0.013051536145818143, 0.013026069089044282, 0.012999943824863788, 0.012973136975294652,
    0.012945624033084118, 0.012917379291639629, 0.012888375769553595, 0.012858585129215956,
    0.01282797758895191, 0.012796521828058485, 0.012764184884041786, 0.012730932041274602,
    0.01269672671020118, 0.01266153029611001, 0.01262530205637422, 0.012587998944920725,
    0.012549575442530055, 0.012509983371385801, 0.012469171692081534, 0.012427086281048688,
    0.01238366968608576, 0.01233886085733933, 0.012292594850703114, 0.012244802500150654,
    0.012195410054988417, 0.012144338777392703, 0.012091504494856239, 0.01203681710129447,
    0.011980179999517733, 0.011921489476525455, 0.011860634001576203, 0.011797493435172156,
    0.011731938134894327, 0.011663827941338231, 0.011593011024105425, 0.011519322563744468,
    0.011442583240496088, 0.011362597494408032, 0.011279151513482967, 0.011192010896522815,
    0.011100917924584524, 0.011005588358578369, 0.01090570765930365, 0.010800926498438434,
    0.010690855392304537, 0.010575058241240162, 0.010453044491258561, 0.01032425954422703,
    0.010188072917471515, 0.010043763477474616, 0.009890500820490252, 0.009727321506577348,
    0.0095530983101736, 0.009366499826523484, 0.009165936493411657, 0.008949487043645179,
    0.008714796035223937, 0.008458927350949032, 0.00840490103785822, 0.008349847365937546,
    0.00829372997764016, 0.008236510483930586, 0.008178148305214133, 0.008118600496046426,
    0.00805782155156597, 0.007995763193278296, 0.007932374131449009, 0.007867599800923013,
    0.007801382066664333, 0.007733658894685944, 0.00766436398328991, 0.007593426348635217,
    0.007520769857558118, 0.007446312699240395, 0.007369966785695164, 0.0072916370690410395,
    0.007211220761062569, 0.007128606437477363, 0.007043673005474771, 0.006956288508226763,
    0.006866308733889168, 0.006773575588690484, 0.0066779151834718675, 0.006579135569697519,
    0.0064770240433855795, 0.006371343912031236, 0.0062618305881308135, 0.006148186830045488,
    0.0060300768917423975, 0.005907119259990051, 0.005778877539444822, 0.005644848874823873,
    0.0055044490462309624, 0.005356992991268384, 0.005201668915455613, 0.005037503210026114,
    0.004863311848135998, 0.00467763129405851, 0.004478617276822756, 0.004263891038246487,
    0.004030295349523055, 0.0037734857051371154, 0.0034871960255887166, 0.0033301841646546514,
    0.0031617920079335896, 0.0029797700848226646, 0.002781025920928466, 0.002561102776075333,
    0.002313152570759717, 0.002025631809294477, 0.0016759952986800581,
];
