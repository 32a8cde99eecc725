mod wav_encoder_test;
