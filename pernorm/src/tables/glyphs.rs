// Sorted by the source character for binary search.
pub const GLYPH_TABLE: [(char, char); 393] = [
    ('\u{00A0}', '\u{0020}'),
    ('\u{0620}', '\u{06CC}'),
    ('\u{063B}', '\u{06A9}'),
    ('\u{063D}', '\u{06CC}'),
    ('\u{063E}', '\u{06CC}'),
    ('\u{063F}', '\u{06CC}'),
    ('\u{0643}', '\u{06A9}'),
    ('\u{0649}', '\u{06CC}'),
    ('\u{064A}', '\u{06CC}'),
    ('\u{066E}', '\u{0628}'),
    ('\u{066F}', '\u{0642}'),
    ('\u{0675}', '\u{0627}'),
    ('\u{0676}', '\u{0648}'),
    ('\u{0677}', '\u{0648}'),
    ('\u{0678}', '\u{06CC}'),
    ('\u{0679}', '\u{062A}'),
    ('\u{067A}', '\u{062A}'),
    ('\u{067B}', '\u{0628}'),
    ('\u{067C}', '\u{062A}'),
    ('\u{067D}', '\u{062A}'),
    ('\u{067F}', '\u{062A}'),
    ('\u{0680}', '\u{0628}'),
    ('\u{0681}', '\u{062D}'),
    ('\u{0682}', '\u{062D}'),
    ('\u{0685}', '\u{062D}'),
    ('\u{0687}', '\u{0686}'),
    ('\u{0688}', '\u{062F}'),
    ('\u{0689}', '\u{062F}'),
    ('\u{068A}', '\u{062F}'),
    ('\u{068B}', '\u{062F}'),
    ('\u{068C}', '\u{062F}'),
    ('\u{068D}', '\u{062F}'),
    ('\u{068E}', '\u{062F}'),
    ('\u{068F}', '\u{062F}'),
    ('\u{0690}', '\u{062F}'),
    ('\u{0691}', '\u{0631}'),
    ('\u{0692}', '\u{0631}'),
    ('\u{0693}', '\u{0631}'),
    ('\u{0694}', '\u{0631}'),
    ('\u{0695}', '\u{0631}'),
    ('\u{0696}', '\u{0631}'),
    ('\u{0697}', '\u{0631}'),
    ('\u{0699}', '\u{0631}'),
    ('\u{069A}', '\u{0633}'),
    ('\u{069B}', '\u{0633}'),
    ('\u{069C}', '\u{0633}'),
    ('\u{069D}', '\u{0635}'),
    ('\u{069E}', '\u{0635}'),
    ('\u{069F}', '\u{0637}'),
    ('\u{06A0}', '\u{0639}'),
    ('\u{06A1}', '\u{0641}'),
    ('\u{06A2}', '\u{0641}'),
    ('\u{06A3}', '\u{0641}'),
    ('\u{06A4}', '\u{0641}'),
    ('\u{06A5}', '\u{0641}'),
    ('\u{06A6}', '\u{0641}'),
    ('\u{06A7}', '\u{0642}'),
    ('\u{06A8}', '\u{0642}'),
    ('\u{06AA}', '\u{06A9}'),
    ('\u{06AB}', '\u{06A9}'),
    ('\u{06AC}', '\u{06A9}'),
    ('\u{06AD}', '\u{06A9}'),
    ('\u{06AE}', '\u{06A9}'),
    ('\u{06B0}', '\u{06AF}'),
    ('\u{06B1}', '\u{06AF}'),
    ('\u{06B2}', '\u{06AF}'),
    ('\u{06B3}', '\u{06AF}'),
    ('\u{06B4}', '\u{06AF}'),
    ('\u{06B5}', '\u{0644}'),
    ('\u{06B6}', '\u{0644}'),
    ('\u{06B7}', '\u{0644}'),
    ('\u{06B8}', '\u{0644}'),
    ('\u{06B9}', '\u{0646}'),
    ('\u{06BA}', '\u{0646}'),
    ('\u{06BB}', '\u{0646}'),
    ('\u{06BC}', '\u{0646}'),
    ('\u{06BD}', '\u{0646}'),
    ('\u{06BE}', '\u{0647}'),
    ('\u{06BF}', '\u{0686}'),
    ('\u{06C1}', '\u{0647}'),
    ('\u{06C2}', '\u{0647}'),
    ('\u{06C3}', '\u{0647}'),
    ('\u{06C4}', '\u{0648}'),
    ('\u{06C5}', '\u{0648}'),
    ('\u{06C6}', '\u{0648}'),
    ('\u{06C7}', '\u{0648}'),
    ('\u{06C8}', '\u{0648}'),
    ('\u{06C9}', '\u{0648}'),
    ('\u{06CA}', '\u{0648}'),
    ('\u{06CB}', '\u{0648}'),
    ('\u{06CD}', '\u{06CC}'),
    ('\u{06CE}', '\u{06CC}'),
    ('\u{06CF}', '\u{0648}'),
    ('\u{06D0}', '\u{06CC}'),
    ('\u{06D1}', '\u{06CC}'),
    ('\u{06D2}', '\u{06CC}'),
    ('\u{06D3}', '\u{06CC}'),
    ('\u{06D5}', '\u{0647}'),
    ('\u{06EE}', '\u{062F}'),
    ('\u{06EF}', '\u{0631}'),
    ('\u{06FA}', '\u{0634}'),
    ('\u{06FB}', '\u{0636}'),
    ('\u{06FC}', '\u{063A}'),
    ('\u{06FF}', '\u{0647}'),
    ('\u{0750}', '\u{0628}'),
    ('\u{0751}', '\u{0628}'),
    ('\u{0752}', '\u{0628}'),
    ('\u{0753}', '\u{0628}'),
    ('\u{0754}', '\u{0628}'),
    ('\u{0755}', '\u{0628}'),
    ('\u{0756}', '\u{0628}'),
    ('\u{0757}', '\u{062D}'),
    ('\u{0758}', '\u{062D}'),
    ('\u{0759}', '\u{062F}'),
    ('\u{075A}', '\u{062F}'),
    ('\u{075B}', '\u{0631}'),
    ('\u{075C}', '\u{0633}'),
    ('\u{075D}', '\u{0639}'),
    ('\u{075E}', '\u{0639}'),
    ('\u{075F}', '\u{0639}'),
    ('\u{0760}', '\u{0641}'),
    ('\u{0761}', '\u{0641}'),
    ('\u{0762}', '\u{06A9}'),
    ('\u{0763}', '\u{06A9}'),
    ('\u{0764}', '\u{06A9}'),
    ('\u{0765}', '\u{0645}'),
    ('\u{0766}', '\u{0645}'),
    ('\u{0767}', '\u{0646}'),
    ('\u{0768}', '\u{0646}'),
    ('\u{0769}', '\u{0646}'),
    ('\u{076A}', '\u{0644}'),
    ('\u{076B}', '\u{0631}'),
    ('\u{076C}', '\u{0631}'),
    ('\u{076D}', '\u{0633}'),
    ('\u{076E}', '\u{062D}'),
    ('\u{076F}', '\u{062D}'),
    ('\u{0770}', '\u{0633}'),
    ('\u{0771}', '\u{0631}'),
    ('\u{0772}', '\u{062D}'),
    ('\u{0773}', '\u{0627}'),
    ('\u{0774}', '\u{0627}'),
    ('\u{0775}', '\u{06CC}'),
    ('\u{0776}', '\u{06CC}'),
    ('\u{0777}', '\u{06CC}'),
    ('\u{0778}', '\u{0648}'),
    ('\u{0779}', '\u{0648}'),
    ('\u{077A}', '\u{06CC}'),
    ('\u{077B}', '\u{06CC}'),
    ('\u{077C}', '\u{062D}'),
    ('\u{077D}', '\u{0633}'),
    ('\u{077E}', '\u{0633}'),
    ('\u{077F}', '\u{06A9}'),
    ('\u{08A0}', '\u{0628}'),
    ('\u{08A1}', '\u{0628}'),
    ('\u{08A2}', '\u{062C}'),
    ('\u{08A3}', '\u{0637}'),
    ('\u{08A4}', '\u{0641}'),
    ('\u{08A5}', '\u{0642}'),
    ('\u{08A6}', '\u{0644}'),
    ('\u{08A7}', '\u{0645}'),
    ('\u{08A8}', '\u{06CC}'),
    ('\u{08A9}', '\u{06CC}'),
    ('\u{08AA}', '\u{0631}'),
    ('\u{08AB}', '\u{0648}'),
    ('\u{08AC}', '\u{06CC}'),
    ('\u{08AE}', '\u{062F}'),
    ('\u{08AF}', '\u{0635}'),
    ('\u{08B0}', '\u{06AF}'),
    ('\u{08B1}', '\u{0648}'),
    ('\u{08B2}', '\u{0632}'),
    ('\u{08B3}', '\u{0639}'),
    ('\u{08B4}', '\u{06A9}'),
    ('\u{08B6}', '\u{0628}'),
    ('\u{08B7}', '\u{067E}'),
    ('\u{08B8}', '\u{062A}'),
    ('\u{08B9}', '\u{0631}'),
    ('\u{08BA}', '\u{06CC}'),
    ('\u{08BB}', '\u{0641}'),
    ('\u{08BC}', '\u{0642}'),
    ('\u{08BD}', '\u{0646}'),
    ('\u{201C}', '\u{0022}'),
    ('\u{201D}', '\u{0022}'),
    ('\u{FB50}', '\u{0627}'),
    ('\u{FB51}', '\u{0627}'),
    ('\u{FB52}', '\u{0628}'),
    ('\u{FB53}', '\u{0628}'),
    ('\u{FB54}', '\u{0628}'),
    ('\u{FB55}', '\u{0628}'),
    ('\u{FB56}', '\u{067E}'),
    ('\u{FB57}', '\u{067E}'),
    ('\u{FB58}', '\u{067E}'),
    ('\u{FB59}', '\u{067E}'),
    ('\u{FB5A}', '\u{0628}'),
    ('\u{FB5B}', '\u{0628}'),
    ('\u{FB5C}', '\u{0628}'),
    ('\u{FB5D}', '\u{0628}'),
    ('\u{FB5E}', '\u{062A}'),
    ('\u{FB5F}', '\u{062A}'),
    ('\u{FB60}', '\u{062A}'),
    ('\u{FB61}', '\u{062A}'),
    ('\u{FB62}', '\u{062A}'),
    ('\u{FB63}', '\u{062A}'),
    ('\u{FB64}', '\u{062A}'),
    ('\u{FB65}', '\u{062A}'),
    ('\u{FB66}', '\u{062A}'),
    ('\u{FB67}', '\u{062A}'),
    ('\u{FB68}', '\u{062A}'),
    ('\u{FB69}', '\u{062A}'),
    ('\u{FB6E}', '\u{0641}'),
    ('\u{FB6F}', '\u{0641}'),
    ('\u{FB70}', '\u{0641}'),
    ('\u{FB71}', '\u{0641}'),
    ('\u{FB72}', '\u{062D}'),
    ('\u{FB73}', '\u{062D}'),
    ('\u{FB74}', '\u{062D}'),
    ('\u{FB75}', '\u{062D}'),
    ('\u{FB76}', '\u{062D}'),
    ('\u{FB77}', '\u{062D}'),
    ('\u{FB78}', '\u{062D}'),
    ('\u{FB79}', '\u{062D}'),
    ('\u{FB7A}', '\u{0686}'),
    ('\u{FB7B}', '\u{0686}'),
    ('\u{FB7C}', '\u{0686}'),
    ('\u{FB7D}', '\u{0686}'),
    ('\u{FB7E}', '\u{0686}'),
    ('\u{FB7F}', '\u{0686}'),
    ('\u{FB80}', '\u{0686}'),
    ('\u{FB81}', '\u{0686}'),
    ('\u{FB82}', '\u{062F}'),
    ('\u{FB83}', '\u{062F}'),
    ('\u{FB84}', '\u{062F}'),
    ('\u{FB85}', '\u{062F}'),
    ('\u{FB86}', '\u{062F}'),
    ('\u{FB87}', '\u{062F}'),
    ('\u{FB88}', '\u{062F}'),
    ('\u{FB89}', '\u{062F}'),
    ('\u{FB8A}', '\u{0698}'),
    ('\u{FB8B}', '\u{0698}'),
    ('\u{FB8C}', '\u{0631}'),
    ('\u{FB8D}', '\u{0631}'),
    ('\u{FB8E}', '\u{06A9}'),
    ('\u{FB8F}', '\u{06A9}'),
    ('\u{FB90}', '\u{06A9}'),
    ('\u{FB91}', '\u{06A9}'),
    ('\u{FB92}', '\u{06AF}'),
    ('\u{FB93}', '\u{06AF}'),
    ('\u{FB94}', '\u{06AF}'),
    ('\u{FB95}', '\u{06AF}'),
    ('\u{FB96}', '\u{06AF}'),
    ('\u{FB97}', '\u{06AF}'),
    ('\u{FB98}', '\u{06AF}'),
    ('\u{FB99}', '\u{06AF}'),
    ('\u{FB9A}', '\u{06AF}'),
    ('\u{FB9B}', '\u{06AF}'),
    ('\u{FB9C}', '\u{06AF}'),
    ('\u{FB9D}', '\u{06AF}'),
    ('\u{FB9E}', '\u{0646}'),
    ('\u{FB9F}', '\u{0646}'),
    ('\u{FBA0}', '\u{0646}'),
    ('\u{FBA1}', '\u{0646}'),
    ('\u{FBA2}', '\u{0646}'),
    ('\u{FBA3}', '\u{0646}'),
    ('\u{FBA4}', '\u{0647}'),
    ('\u{FBA5}', '\u{0647}'),
    ('\u{FBA6}', '\u{0647}'),
    ('\u{FBA7}', '\u{0647}'),
    ('\u{FBA8}', '\u{0647}'),
    ('\u{FBA9}', '\u{0647}'),
    ('\u{FBAA}', '\u{0647}'),
    ('\u{FBAB}', '\u{0647}'),
    ('\u{FBAC}', '\u{0647}'),
    ('\u{FBAD}', '\u{0647}'),
    ('\u{FBAE}', '\u{06CC}'),
    ('\u{FBAF}', '\u{06CC}'),
    ('\u{FBB0}', '\u{06CC}'),
    ('\u{FBB1}', '\u{06CC}'),
    ('\u{FBFD}', '\u{06CC}'),
    ('\u{FBFE}', '\u{06CC}'),
    ('\u{FBFF}', '\u{06CC}'),
    ('\u{FE80}', '\u{0621}'),
    ('\u{FE81}', '\u{0627}'),
    ('\u{FE83}', '\u{0627}'),
    ('\u{FE84}', '\u{0627}'),
    ('\u{FE85}', '\u{0648}'),
    ('\u{FE86}', '\u{0648}'),
    ('\u{FE87}', '\u{0627}'),
    ('\u{FE88}', '\u{0627}'),
    ('\u{FE89}', '\u{06CC}'),
    ('\u{FE8A}', '\u{06CC}'),
    ('\u{FE8B}', '\u{06CC}'),
    ('\u{FE8C}', '\u{06CC}'),
    ('\u{FE8D}', '\u{0627}'),
    ('\u{FE8E}', '\u{0627}'),
    ('\u{FE8F}', '\u{0628}'),
    ('\u{FE90}', '\u{0628}'),
    ('\u{FE91}', '\u{0628}'),
    ('\u{FE92}', '\u{0628}'),
    ('\u{FE95}', '\u{062A}'),
    ('\u{FE96}', '\u{062A}'),
    ('\u{FE97}', '\u{062A}'),
    ('\u{FE98}', '\u{062A}'),
    ('\u{FE99}', '\u{062B}'),
    ('\u{FE9A}', '\u{062B}'),
    ('\u{FE9B}', '\u{062B}'),
    ('\u{FE9C}', '\u{062B}'),
    ('\u{FE9D}', '\u{062C}'),
    ('\u{FE9E}', '\u{062C}'),
    ('\u{FE9F}', '\u{062C}'),
    ('\u{FEA0}', '\u{062C}'),
    ('\u{FEA1}', '\u{062D}'),
    ('\u{FEA2}', '\u{062D}'),
    ('\u{FEA3}', '\u{062D}'),
    ('\u{FEA4}', '\u{062D}'),
    ('\u{FEA5}', '\u{062E}'),
    ('\u{FEA6}', '\u{062E}'),
    ('\u{FEA7}', '\u{062E}'),
    ('\u{FEA8}', '\u{062E}'),
    ('\u{FEA9}', '\u{062F}'),
    ('\u{FEAA}', '\u{062F}'),
    ('\u{FEAB}', '\u{0630}'),
    ('\u{FEAC}', '\u{0630}'),
    ('\u{FEAD}', '\u{0631}'),
    ('\u{FEAE}', '\u{0631}'),
    ('\u{FEAF}', '\u{0632}'),
    ('\u{FEB0}', '\u{0632}'),
    ('\u{FEB1}', '\u{0633}'),
    ('\u{FEB2}', '\u{0633}'),
    ('\u{FEB3}', '\u{0633}'),
    ('\u{FEB4}', '\u{0633}'),
    ('\u{FEB5}', '\u{0634}'),
    ('\u{FEB6}', '\u{0634}'),
    ('\u{FEB7}', '\u{0634}'),
    ('\u{FEB8}', '\u{0634}'),
    ('\u{FEB9}', '\u{0635}'),
    ('\u{FEBA}', '\u{0635}'),
    ('\u{FEBB}', '\u{0635}'),
    ('\u{FEBC}', '\u{0635}'),
    ('\u{FEBD}', '\u{0636}'),
    ('\u{FEBE}', '\u{0636}'),
    ('\u{FEBF}', '\u{0636}'),
    ('\u{FEC0}', '\u{0636}'),
    ('\u{FEC1}', '\u{0637}'),
    ('\u{FEC2}', '\u{0637}'),
    ('\u{FEC3}', '\u{0637}'),
    ('\u{FEC4}', '\u{0637}'),
    ('\u{FEC5}', '\u{0638}'),
    ('\u{FEC6}', '\u{0638}'),
    ('\u{FEC7}', '\u{0638}'),
    ('\u{FEC8}', '\u{0638}'),
    ('\u{FEC9}', '\u{0639}'),
    ('\u{FECA}', '\u{0639}'),
    ('\u{FECB}', '\u{0639}'),
    ('\u{FECC}', '\u{0639}'),
    ('\u{FECD}', '\u{063A}'),
    ('\u{FECE}', '\u{063A}'),
    ('\u{FECF}', '\u{063A}'),
    ('\u{FED0}', '\u{063A}'),
    ('\u{FED1}', '\u{0641}'),
    ('\u{FED2}', '\u{0641}'),
    ('\u{FED3}', '\u{0641}'),
    ('\u{FED4}', '\u{0641}'),
    ('\u{FED5}', '\u{0642}'),
    ('\u{FED6}', '\u{0642}'),
    ('\u{FED7}', '\u{0642}'),
    ('\u{FED8}', '\u{0642}'),
    ('\u{FED9}', '\u{06A9}'),
    ('\u{FEDA}', '\u{06A9}'),
    ('\u{FEDB}', '\u{06A9}'),
    ('\u{FEDC}', '\u{06A9}'),
    ('\u{FEDD}', '\u{0644}'),
    ('\u{FEDE}', '\u{0644}'),
    ('\u{FEDF}', '\u{0644}'),
    ('\u{FEE0}', '\u{0644}'),
    ('\u{FEE1}', '\u{0645}'),
    ('\u{FEE2}', '\u{0645}'),
    ('\u{FEE3}', '\u{0645}'),
    ('\u{FEE4}', '\u{0645}'),
    ('\u{FEE5}', '\u{0646}'),
    ('\u{FEE6}', '\u{0646}'),
    ('\u{FEE7}', '\u{0646}'),
    ('\u{FEE8}', '\u{0646}'),
    ('\u{FEE9}', '\u{0647}'),
    ('\u{FEEA}', '\u{0647}'),
    ('\u{FEEB}', '\u{0647}'),
    ('\u{FEEC}', '\u{0647}'),
    ('\u{FEED}', '\u{0648}'),
    ('\u{FEEE}', '\u{0648}'),
    ('\u{FEEF}', '\u{06CC}'),
    ('\u{FEF0}', '\u{06CC}'),
    ('\u{FEF1}', '\u{06CC}'),
    ('\u{FEF2}', '\u{06CC}'),
    ('\u{FEF3}', '\u{06CC}'),
    ('\u{FEF4}', '\u{06CC}'),
];
